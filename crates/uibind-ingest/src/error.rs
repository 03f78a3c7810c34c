use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read header {path}: {source}")]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid object type {object_type:?}: {source}")]
    Pattern {
        object_type: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
