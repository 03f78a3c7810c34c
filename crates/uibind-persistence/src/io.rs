//! Reading and writing the document file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use uibind_common::write_atomic;
use uibind_model::{BindingStore, NotesLog};

use crate::apply::{LoadSummary, apply_document};
use crate::document::ConfigurationDocument;
use crate::error::{PersistenceError, Result};

/// Write `document` to `path`, replacing any previous document atomically.
pub fn save_document(document: &ConfigurationDocument, path: &Path) -> Result<()> {
    let json = document.to_json()?;
    write_atomic(path, json.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        entries = document.variables.len(),
        "saved configuration document"
    );
    Ok(())
}

/// Snapshot `store` and save it.
pub fn save_store(store: &BindingStore, path: &Path) -> Result<ConfigurationDocument> {
    let document = ConfigurationDocument::from_store(store);
    save_document(&document, path)?;
    Ok(document)
}

/// Read a document; `Ok(None)` when there is no file yet.
pub fn load_document(path: &Path) -> Result<Option<ConfigurationDocument>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    ConfigurationDocument::from_slice(&bytes, path).map(Some)
}

/// Outcome of [`load_into_store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No document on disk; the store keeps its defaults.
    Missing,
    Loaded(LoadSummary),
}

/// Load the document at `path` (if any) and overlay it onto `store`.
pub fn load_into_store(
    path: &Path,
    store: &mut BindingStore,
    notes: &mut NotesLog,
) -> Result<LoadOutcome> {
    let Some(document) = load_document(path)? else {
        tracing::warn!(path = %path.display(), "configuration document not found, using defaults");
        return Ok(LoadOutcome::Missing);
    };
    let summary = apply_document(&document, store, notes);
    tracing::info!(
        path = %path.display(),
        applied = summary.applied,
        stale = summary.stale_identifiers.len(),
        rejected = summary.rejected_keys.len(),
        "loaded configuration document"
    );
    Ok(LoadOutcome::Loaded(summary))
}
