//! Prefix-based symbol classification.
//!
//! The constant prefix (e.g. `ui_`) is removed once from the front of the
//! identifier; the first three characters of what remains are looked up in
//! the [`PrefixTypeTable`]. Matching is case-sensitive, display defaults
//! are lower-cased.

use tracing::{debug, warn};
use uibind_model::{
    BindingEntry, BindingStore, FALLBACK_MAPPING, ModelError, NotesLog, PREFIX_LEN,
    PrefixTypeTable,
};

use crate::scanner::SymbolDeclaration;

/// What happened to one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Prefix found in the table.
    Mapped(BindingEntry),
    /// Prefix unknown, accepted because accept-all is on.
    Fallback(BindingEntry),
    /// Prefix unknown and accept-all off.
    Rejected { stripped_name: String },
}

impl Classification {
    pub fn entry(&self) -> Option<&BindingEntry> {
        match self {
            Classification::Mapped(entry) | Classification::Fallback(entry) => Some(entry),
            Classification::Rejected { .. } => None,
        }
    }
}

/// Classification settings for one scan.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    table: &'a PrefixTypeTable,
    constant_prefix: &'a str,
    accept_all: bool,
}

impl<'a> Classifier<'a> {
    pub fn new(table: &'a PrefixTypeTable, constant_prefix: &'a str, accept_all: bool) -> Self {
        Self {
            table,
            constant_prefix,
            accept_all,
        }
    }

    /// Identifier with the constant prefix removed once, left-anchored.
    pub fn strip_constant_prefix<'s>(&self, identifier: &'s str) -> &'s str {
        identifier
            .strip_prefix(self.constant_prefix)
            .unwrap_or(identifier)
    }

    pub fn classify(&self, declaration: &SymbolDeclaration) -> Classification {
        let identifier = declaration.identifier.as_str();
        let stripped = self.strip_constant_prefix(identifier);
        let (prefix, remainder) = split_prefix(stripped);

        if let Some(mapping) = prefix.and_then(|p| self.table.lookup(p)) {
            let display_name = remainder.trim_start_matches('_').to_lowercase();
            return Classification::Mapped(BindingEntry::new(identifier, display_name, mapping));
        }

        if self.accept_all {
            return Classification::Fallback(BindingEntry::new(
                identifier,
                stripped.to_lowercase(),
                FALLBACK_MAPPING,
            ));
        }

        Classification::Rejected {
            stripped_name: stripped.to_string(),
        }
    }
}

/// Split off the leading [`PREFIX_LEN`] characters, if there are that many.
fn split_prefix(name: &str) -> (Option<&str>, &str) {
    match name.char_indices().nth(PREFIX_LEN) {
        Some((at, _)) => (Some(&name[..at]), &name[at..]),
        None if name.chars().count() == PREFIX_LEN => (Some(name), ""),
        None => (None, name),
    }
}

/// Counts from one classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub declarations: usize,
    pub mapped: usize,
    pub fallback: usize,
    pub rejected: usize,
    pub duplicates: usize,
}

/// Replay declarations through the classifier into a fresh store.
///
/// Rejections are recorded in `notes`. A repeated identifier keeps its
/// first entry.
pub fn build_store<I>(
    declarations: I,
    classifier: &Classifier<'_>,
    notes: &mut NotesLog,
) -> (BindingStore, ScanSummary)
where
    I: IntoIterator<Item = SymbolDeclaration>,
{
    let mut store = BindingStore::new();
    let mut summary = ScanSummary::default();

    for declaration in declarations {
        summary.declarations += 1;
        let classification = classifier.classify(&declaration);
        let entry = match classification {
            Classification::Mapped(entry) => {
                summary.mapped += 1;
                entry
            }
            Classification::Fallback(entry) => {
                summary.fallback += 1;
                entry
            }
            Classification::Rejected { stripped_name } => {
                summary.rejected += 1;
                debug!(identifier = %declaration.identifier, line = declaration.line, "unmapped symbol");
                notes.push(format!(
                    "'{stripped_name}' produce/consume mapping not supported"
                ));
                continue;
            }
        };

        match store.insert(entry) {
            Ok(()) => {}
            Err(ModelError::DuplicateIdentifier(identifier)) => {
                summary.duplicates += 1;
                warn!(%identifier, line = declaration.line, "symbol declared more than once");
            }
            Err(error) => warn!(%error, "could not add entry"),
        }
    }

    (store, summary)
}
