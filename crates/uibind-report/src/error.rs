use thiserror::Error;
use uibind_common::WriteError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write generated source: {0}")]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
