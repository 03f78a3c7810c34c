//! Header ingestion: declaration scanning and prefix classification.

pub mod classify;
pub mod error;
pub mod scanner;

pub use classify::{Classification, Classifier, ScanSummary, build_store};
pub use error::{IngestError, Result};
pub use scanner::{
    DEFAULT_OBJECT_TYPE, DeclarationScanner, Declarations, SymbolDeclaration, read_header,
};
