use thiserror::Error;
use uibind_ingest::IngestError;
use uibind_model::ModelError;
use uibind_persistence::PersistenceError;
use uibind_report::ReportError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The header could not be read; nothing is generated.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Edit(#[from] ModelError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CoreError {
    /// Errors that end the run before any artifact is touched.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Ingest(_))
    }

    /// A hint for the operator, if there is a useful one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Ingest(IngestError::HeaderRead { .. }) => {
                Some("Check --working-dir and --include point at the generated UI header.")
            }
            Self::Ingest(IngestError::Pattern { .. }) => None,
            Self::Edit(_) => Some("Run `uibind types` to list the accepted control types and events."),
            Self::Persistence(error) => error.suggestion(),
            Self::Report(_) => Some("Free up disk space or choose a different working directory."),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
