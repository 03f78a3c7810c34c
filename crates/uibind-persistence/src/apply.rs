//! Applying a loaded document to the current store.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, trace};
use uibind_model::{BindingField, BindingStore, FieldEdit, FieldValue, NotesLog};

use crate::document::{ConfigurationDocument, split_key};

/// What a load did to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Field values written into existing entries.
    pub applied: usize,
    /// Identifiers the document knows but the header no longer declares.
    pub stale_identifiers: Vec<String>,
    /// Keys for current entries whose value could not be used.
    pub rejected_keys: Vec<String>,
    /// Keys that do not name a field at all.
    pub unknown_keys: usize,
}

/// Overlay document values onto `store`.
///
/// Entries the document does not mention keep their defaults. Stale
/// identifiers get one note each; values of the wrong kind or outside the
/// tag vocabularies are noted and left unapplied.
pub fn apply_document(
    document: &ConfigurationDocument,
    store: &mut BindingStore,
    notes: &mut NotesLog,
) -> LoadSummary {
    let mut summary = LoadSummary::default();
    let mut seen_stale = HashSet::new();

    for identifier in &document.variables {
        if !store.contains(identifier) {
            mark_stale(identifier, &mut seen_stale, &mut summary, notes);
        }
    }

    for (key, value) in &document.values {
        let Some((identifier, suffix)) = split_key(key) else {
            trace!(%key, "ignoring key without field suffix");
            summary.unknown_keys += 1;
            continue;
        };
        let Ok(field) = suffix.parse::<BindingField>() else {
            trace!(%key, "ignoring key with unknown field");
            summary.unknown_keys += 1;
            continue;
        };
        if !store.contains(identifier) {
            mark_stale(identifier, &mut seen_stale, &mut summary, notes);
            continue;
        }

        let edit = json_to_field_value(value)
            .and_then(|value| FieldEdit::from_value(field, value).ok());
        match edit {
            Some(edit) => {
                if store.edit(identifier, edit).is_ok() {
                    summary.applied += 1;
                }
            }
            None => {
                debug!(%key, %value, "unsupported value in document");
                notes.push(format!("{key} has unsupported value {value}, skipping"));
                summary.rejected_keys.push(key.clone());
            }
        }
    }

    summary
}

fn mark_stale(
    identifier: &str,
    seen: &mut HashSet<String>,
    summary: &mut LoadSummary,
    notes: &mut NotesLog,
) {
    if seen.insert(identifier.to_string()) {
        notes.push(format!("{identifier} not in current code, skipping"));
        summary.stale_identifiers.push(identifier.to_string());
    }
}

fn json_to_field_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::String(text) => Some(FieldValue::Text(text.clone())),
        Value::Bool(flag) => Some(FieldValue::Flag(*flag)),
        _ => None,
    }
}
