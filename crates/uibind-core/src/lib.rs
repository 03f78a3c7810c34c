//! Binding session orchestration.
//!
//! Ties the scanner, classifier, persistence and emitter together behind
//! the command protocol any front end uses: rescan, load, edit, save and
//! notes.

pub mod error;
pub mod options;
pub mod session;

pub use error::{CoreError, Result};
pub use options::BindingOptions;
pub use session::{LoadStatus, SaveReport, Session};
