//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for a toclist.toml in the working directory, and if present we load settings from
//! there. Currently this provides the bullet marker for generated lists.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "toclist.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from toclist.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "*".to_string())]
    /// Bullet symbol for generated lists; only the first byte is used.
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: "*".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from toclist.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the text is not valid configuration.
    pub fn parse(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// Marker byte to hand to the renderer; 0 when unset so the renderer picks its default.
    ///
    /// A marker that is not a single ASCII character is ignored with a warning.
    pub fn marker_byte(&self) -> u8 {
        let mut chars = self.marker.chars();
        match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some(c), None) => ascii_marker(c).unwrap_or_else(|_| {
                log::warn!("ignoring marker {c:?} in {CONFIG_FILE}: not an ASCII character");
                0
            }),
            (Some(_), Some(_)) => {
                log::warn!(
                    "ignoring marker {:?} in {CONFIG_FILE}: not a single character",
                    self.marker
                );
                0
            }
        }
    }
}

/// Marker for the renderer: the command line value if given, otherwise the configured one.
///
/// # Errors
///
/// Returns [`Error::InvalidMarker`] if the command line marker is not an ASCII character.
pub fn resolve_marker(cli: Option<char>, cfg: &Config) -> Result<u8> {
    match cli {
        Some(c) => ascii_marker(c),
        None => Ok(cfg.marker_byte()),
    }
}

fn ascii_marker(c: char) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(Error::InvalidMarker(c))
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
