//! The persisted configuration document.
//!
//! The on-disk shape is an external contract shared with documents written
//! by earlier tooling:
//!
//! ```text
//! {
//!   "variables": ["ui_btn_submit", ...],
//!   "values": {
//!     "ui_btn_submit_name": "submit",
//!     "ui_btn_submit_type": "BUTTON_CT",
//!     "ui_btn_submit_con": false,
//!     "ui_btn_submit_pro": true,
//!     "ui_btn_submit_event": "LV_EVENT_CLICKED",
//!     "ui_btn_submit_grp": false
//!   }
//! }
//! ```
//!
//! Inside the crate values are addressed by `(identifier, BindingField)`;
//! the string keys only exist here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uibind_model::{BindingField, BindingStore, FieldValue};

use crate::error::{PersistenceError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    /// Identifiers known at save time, in store order.
    #[serde(default)]
    pub variables: Vec<String>,
    /// Flat `<identifier>_<field>` values, in document order.
    #[serde(default)]
    pub values: Map<String, Value>,
}

impl ConfigurationDocument {
    /// Snapshot every field of every entry.
    pub fn from_store(store: &BindingStore) -> Self {
        let mut values = Map::new();
        for entry in store {
            for field in BindingField::ALL {
                let value = match entry.value(field) {
                    FieldValue::Text(text) => Value::String(text),
                    FieldValue::Flag(flag) => Value::Bool(flag),
                };
                values.insert(field_key(entry.identifier(), field), value);
            }
        }
        Self {
            variables: store.identifiers().map(str::to_string).collect(),
            values,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| PersistenceError::Serialization { source: e })?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        Self::from_slice(text.as_bytes(), path)
    }

    /// Parse raw file bytes; invalid UTF-8 is a parse failure like any other.
    pub fn from_slice(bytes: &[u8], path: &Path) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

pub fn field_key(identifier: &str, field: BindingField) -> String {
    format!("{identifier}_{}", field.key_suffix())
}

/// Split a persisted key at its last underscore.
///
/// Field suffixes never contain an underscore, so identifiers that do are
/// still recovered intact.
pub fn split_key(key: &str) -> Option<(&str, &str)> {
    key.rsplit_once('_')
        .filter(|(identifier, suffix)| !identifier.is_empty() && !suffix.is_empty())
}
