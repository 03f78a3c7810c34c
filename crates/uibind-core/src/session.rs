//! The binding session: one owned store driven by operator commands.
//!
//! Every command (rescan, load, edit, save) takes the session by
//! reference; `&mut self` on the mutating ones means a save always sees a
//! consistent snapshot of the store.

use std::path::PathBuf;

use tracing::{info, info_span, warn};
use uibind_ingest::{Classifier, DeclarationScanner, ScanSummary, build_store, read_header};
use uibind_model::{
    BindingEntry, BindingField, BindingStore, FieldEdit, NotesLog, PrefixTypeTable,
};
use uibind_persistence::{
    LoadOutcome, LoadSummary, PersistenceError, load_into_store, save_store,
};
use uibind_report::{Banner, EmitOptions, write_binding_source};

use crate::error::Result;
use crate::options::BindingOptions;

/// Result of [`Session::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No document yet; entries keep their defaults.
    Missing,
    /// A document exists but could not be parsed; entries keep their defaults.
    Unparsable,
    /// Something is at the document path but it could not be read.
    Unreadable,
    Loaded(LoadSummary),
}

/// Paths and text produced by [`Session::save`].
#[derive(Debug, Clone)]
pub struct SaveReport {
    pub document_path: PathBuf,
    pub source_path: PathBuf,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    options: BindingOptions,
    table: PrefixTypeTable,
    store: BindingStore,
    notes: NotesLog,
    last_scan: ScanSummary,
}

impl Session {
    /// An empty session using the standard prefix table.
    pub fn new(options: BindingOptions) -> Self {
        Self::with_table(options, PrefixTypeTable::standard())
    }

    pub fn with_table(options: BindingOptions, table: PrefixTypeTable) -> Self {
        Self {
            options,
            table,
            store: BindingStore::new(),
            notes: NotesLog::new(),
            last_scan: ScanSummary::default(),
        }
    }

    /// Scan the header and load the saved document, as at startup.
    ///
    /// # Errors
    ///
    /// Fails only if the header cannot be read; any trouble with the
    /// document is logged and the defaults kept.
    pub fn open(options: BindingOptions) -> Result<Self> {
        let mut session = Self::new(options);
        session.rescan()?;
        session.load();
        Ok(session)
    }

    /// Rebuild the store from the header, discarding all edits.
    pub fn rescan(&mut self) -> Result<ScanSummary> {
        let header_path = self.options.header_path();
        let _span = info_span!("scan", header = %header_path.display()).entered();

        let text = read_header(&header_path)?;
        let scanner = if self.options.object_type == uibind_ingest::DEFAULT_OBJECT_TYPE {
            DeclarationScanner::new(text)
        } else {
            DeclarationScanner::with_object_type(text, &self.options.object_type)?
        };
        let classifier = Classifier::new(
            &self.table,
            &self.options.constant_prefix,
            self.options.accept_all,
        );
        let (store, summary) = build_store(scanner.declarations(), &classifier, &mut self.notes);

        info!(
            declarations = summary.declarations,
            mapped = summary.mapped,
            fallback = summary.fallback,
            rejected = summary.rejected,
            "scan complete"
        );
        self.store = store;
        self.last_scan = summary;
        Ok(summary)
    }

    /// Overlay the saved document onto the current store.
    ///
    /// Never fails: a document that is missing, unreadable or malformed
    /// leaves the entries at their defaults and the next save replaces it.
    pub fn load(&mut self) -> LoadStatus {
        let path = self.options.document_path();
        match load_into_store(&path, &mut self.store, &mut self.notes) {
            Ok(LoadOutcome::Missing) => LoadStatus::Missing,
            Ok(LoadOutcome::Loaded(summary)) => LoadStatus::Loaded(summary),
            Err(error) => {
                warn!(
                    %error,
                    hint = error.suggestion().unwrap_or_default(),
                    "ignoring configuration document, using defaults"
                );
                if matches!(error, PersistenceError::Deserialization { .. }) {
                    LoadStatus::Unparsable
                } else {
                    LoadStatus::Unreadable
                }
            }
        }
    }

    /// Edit one field from operator text (`field` as in the document keys
    /// or their long names).
    pub fn edit(&mut self, identifier: &str, field: &str, value: &str) -> Result<()> {
        let field: BindingField = field.parse()?;
        let edit = FieldEdit::parse(field, value)?;
        self.apply(identifier, edit)
    }

    pub fn apply(&mut self, identifier: &str, edit: FieldEdit) -> Result<()> {
        let field = edit.field();
        self.store.edit(identifier, edit)?;
        info!(%identifier, %field, "field updated");
        Ok(())
    }

    /// Emit options matching this session's header.
    pub fn emit_options(&self, diagnostic: bool, banner: Option<Banner>) -> EmitOptions {
        EmitOptions {
            include_file: self.options.include_file.clone(),
            diagnostic,
            banner,
        }
    }

    /// Save the document, then regenerate the source.
    pub fn save(&self, emit: &EmitOptions) -> Result<SaveReport> {
        let document_path = self.options.document_path();
        let source_path = self.options.source_path();

        save_store(&self.store, &document_path)?;
        let source = write_binding_source(&self.store, emit, &source_path)?;

        Ok(SaveReport {
            document_path,
            source_path,
            source,
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &BindingEntry> {
        self.store.iter()
    }

    pub fn store(&self) -> &BindingStore {
        &self.store
    }

    pub fn notes(&self) -> &NotesLog {
        &self.notes
    }

    pub fn last_scan(&self) -> ScanSummary {
        self.last_scan
    }
}
