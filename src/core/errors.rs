//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sigmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A document could not be read
    #[error("Failed to read document {path}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Fact database errors
    #[error("Fact database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a document read error with path context
    pub fn document(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Document {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
