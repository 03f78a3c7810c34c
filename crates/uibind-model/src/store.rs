//! Ordered, identifier-keyed collection of binding entries.

use std::collections::HashMap;

use crate::entry::{BindingEntry, FieldEdit};
use crate::error::{ModelError, Result};

/// Binding entries in discovery order.
///
/// Entries are never removed; a rescan builds a fresh store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingStore {
    entries: Vec<BindingEntry>,
    index: HashMap<String, usize>,
}

impl BindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateIdentifier`] if an entry with the
    /// same identifier already exists.
    pub fn insert(&mut self, entry: BindingEntry) -> Result<()> {
        if self.index.contains_key(entry.identifier()) {
            return Err(ModelError::DuplicateIdentifier(
                entry.identifier().to_string(),
            ));
        }
        self.index
            .insert(entry.identifier().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&BindingEntry> {
        self.index.get(identifier).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Apply a single-field edit to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownIdentifier`] if no entry matches.
    pub fn edit(&mut self, identifier: &str, edit: FieldEdit) -> Result<()> {
        let &i = self
            .index
            .get(identifier)
            .ok_or_else(|| ModelError::UnknownIdentifier(identifier.to_string()))?;
        self.entries[i].apply(edit);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BindingEntry> {
        self.entries.iter()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(BindingEntry::identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a BindingStore {
    type Item = &'a BindingEntry;
    type IntoIter = std::slice::Iter<'a, BindingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
