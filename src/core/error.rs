//! Error types for build-time data loading.
//!
//! The presentation layer has no user-visible error surface: a bad
//! catalog is logged and the site renders with an empty project list.

use std::fmt;

/// Errors raised while loading the embedded project catalog.
#[derive(Debug, Clone)]
pub enum DataError {
    /// The embedded TOML failed to parse.
    CatalogParse(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogParse(msg) => write!(f, "project catalog parse error: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}
