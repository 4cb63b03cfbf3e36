//! Errors raised at the I/O edges of the crate.
//!
//! Rendering itself is total; only reading a table of contents, validating command line input and
//! writing JSON output can fail.

use thiserror::Error;

/// Failure while loading a table of contents or emitting the rendered tree.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file or stdin could not be read.
    #[error("failed to read table of contents: {0}")]
    Io(#[from] std::io::Error),

    /// The input was read but is not a table of contents document.
    #[error("invalid table of contents in {origin}: {source}")]
    Json {
        /// Where the input came from, a path or `<stdin>`.
        origin: String,
        /// Parser error with line and column.
        source: serde_json::Error,
    },

    /// The requested list marker does not fit in a single byte.
    #[error("list marker must be a single ASCII character, got {0:?}")]
    InvalidMarker(char),

    /// The rendered tree could not be written as JSON.
    #[error("failed to serialize rendered list: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
