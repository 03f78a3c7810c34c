//! Persistence error types.

use std::path::PathBuf;

use thiserror::Error;
use uibind_common::WriteError;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error other than "not found".
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be written in place.
    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("failed to serialize configuration document: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The file exists but is not a configuration document.
    #[error("failed to parse configuration document {path}: {source}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    /// A hint for the operator, if there is a useful one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the document is a regular file you have permission to read.")
                } else {
                    Some("Check that you have permission to access this location.")
                }
            }
            Self::Write(_) => Some("Free up disk space or choose a different working directory."),
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => {
                Some("Delete or fix the file; saving again will write a fresh document.")
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
