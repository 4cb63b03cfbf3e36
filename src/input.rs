//! Loading a table of contents handed over as JSON.
//!
//! The heading scanner runs elsewhere; it passes its result to us either as a file or on stdin.

use crate::error::{Error, Result};
use crate::toc::Toc;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Placeholder path meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Parse a table of contents from JSON text, naming `origin` in any error.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not a table of contents document.
pub fn toc_from_json(json: &str, origin: &str) -> Result<Toc> {
    serde_json::from_str(json).map_err(|source| Error::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Read a table of contents from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or does not parse.
pub fn read_toc(path: Option<&Path>) -> Result<Toc> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            log::debug!("reading table of contents from {}", path.display());
            let contents = fs::read_to_string(path)?;
            toc_from_json(&contents, &path.display().to_string())
        }
        _ => {
            log::debug!("reading table of contents from stdin");
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            toc_from_json(&contents, "<stdin>")
        }
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
