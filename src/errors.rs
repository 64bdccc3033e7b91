//! Shared error types for fibseq.
//!
//! Library operations return [`Result`], which carries the typed [`Error`]
//! below. The command layer and the binary wrap these in `anyhow` so that
//! `main` can report any failure with context.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fibseq operations
#[derive(Debug, Error)]
pub enum Error {
    /// The requested count produces values too large for `u64`
    #[error("cannot generate {requested} values: at most {max} fit in a u64")]
    Overflow { requested: i64, max: usize },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", .path.display())]
    Configuration { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error with path context
    pub fn configuration(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error comes from the requested count rather than the environment
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
