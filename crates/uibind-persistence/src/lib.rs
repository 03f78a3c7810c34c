//! Saved binding configuration.
//!
//! The configuration document records every field of every entry so that
//! operator edits survive regeneration. Loading is tolerant: keys for
//! symbols that have disappeared from the header are noted and skipped,
//! and entries the document never mentions keep their defaults.
//!
//! # Architecture
//!
//! - `document.rs` - the serde shape and key flattening
//! - `apply.rs` - overlaying a document onto a [`BindingStore`](uibind_model::BindingStore)
//! - `io.rs` - atomic save, missing-file tolerant load
//! - `error.rs` - error types

mod apply;
mod document;
mod error;
mod io;

pub use apply::{LoadSummary, apply_document};
pub use document::{ConfigurationDocument, field_key, split_key};
pub use error::{PersistenceError, Result};
pub use io::{LoadOutcome, load_document, load_into_store, save_document, save_store};
