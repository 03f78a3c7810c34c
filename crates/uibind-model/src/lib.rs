//! Data model for UI symbol bindings.
//!
//! A header declares widget objects; each accepted declaration becomes a
//! [`BindingEntry`] whose defaults come from the [`PrefixTypeTable`]. The
//! [`BindingStore`] keeps entries in header order and is the single value
//! that scan, edit, save and load operate on.

pub mod entry;
pub mod error;
pub mod notes;
pub mod prefix;
pub mod store;
pub mod tags;

pub use entry::{BindingEntry, BindingField, FieldEdit, FieldValue};
pub use error::{ModelError, Result};
pub use notes::NotesLog;
pub use prefix::{FALLBACK_MAPPING, PREFIX_LEN, PrefixMapping, PrefixTypeTable};
pub use store::BindingStore;
pub use tags::{ControlType, EventCode};
