//! Per-symbol binding configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::prefix::PrefixMapping;
use crate::tags::{ControlType, EventCode};

/// Editable configuration for one declared symbol.
///
/// `identifier` is the primary key and never changes after creation;
/// every other field is set through [`BindingEntry::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    identifier: String,
    pub display_name: String,
    pub control_type: ControlType,
    pub event: EventCode,
    pub produce: bool,
    pub consume: bool,
    pub group: bool,
}

impl BindingEntry {
    /// Create an entry with classification defaults and all flags off.
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        mapping: PrefixMapping,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            control_type: mapping.control_type,
            event: mapping.event,
            produce: false,
            consume: false,
            group: false,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::DisplayName(name) => self.display_name = name,
            FieldEdit::ControlType(control_type) => self.control_type = control_type,
            FieldEdit::Event(event) => self.event = event,
            FieldEdit::Consume(flag) => self.consume = flag,
            FieldEdit::Produce(flag) => self.produce = flag,
            FieldEdit::Group(flag) => self.group = flag,
        }
    }

    /// Current value of one field, flattened for persistence.
    pub fn value(&self, field: BindingField) -> FieldValue {
        match field {
            BindingField::DisplayName => FieldValue::Text(self.display_name.clone()),
            BindingField::ControlType => FieldValue::Text(self.control_type.as_str().to_string()),
            BindingField::Event => FieldValue::Text(self.event.as_str().to_string()),
            BindingField::Consume => FieldValue::Flag(self.consume),
            BindingField::Produce => FieldValue::Flag(self.produce),
            BindingField::Group => FieldValue::Flag(self.group),
        }
    }
}

/// The editable fields of a [`BindingEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BindingField {
    DisplayName,
    ControlType,
    Event,
    Consume,
    Produce,
    Group,
}

impl BindingField {
    pub const ALL: [BindingField; 6] = [
        BindingField::DisplayName,
        BindingField::ControlType,
        BindingField::Consume,
        BindingField::Produce,
        BindingField::Event,
        BindingField::Group,
    ];

    /// Suffix used in persisted `<identifier>_<suffix>` keys.
    pub fn key_suffix(self) -> &'static str {
        match self {
            BindingField::DisplayName => "name",
            BindingField::ControlType => "type",
            BindingField::Event => "event",
            BindingField::Consume => "con",
            BindingField::Produce => "pro",
            BindingField::Group => "grp",
        }
    }

    pub fn is_flag(self) -> bool {
        matches!(
            self,
            BindingField::Consume | BindingField::Produce | BindingField::Group
        )
    }
}

impl fmt::Display for BindingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_suffix())
    }
}

impl FromStr for BindingField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" | "display_name" => Ok(BindingField::DisplayName),
            "type" | "control_type" => Ok(BindingField::ControlType),
            // "evt" is the suffix older documents were written with
            "event" | "evt" => Ok(BindingField::Event),
            "con" | "consume" => Ok(BindingField::Consume),
            "pro" | "produce" => Ok(BindingField::Produce),
            "grp" | "group" => Ok(BindingField::Group),
            "identifier" | "id" => Err(ModelError::ImmutableField(s.to_string())),
            other => Err(ModelError::UnknownField(other.to_string())),
        }
    }
}

/// A flattened field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// A typed single-field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    DisplayName(String),
    ControlType(ControlType),
    Event(EventCode),
    Consume(bool),
    Produce(bool),
    Group(bool),
}

impl FieldEdit {
    /// Parse operator text into an edit for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`] for flags that are not a
    /// recognized boolean spelling, and the tag parse errors for control
    /// types and events outside the known vocabularies.
    pub fn parse(field: BindingField, text: &str) -> Result<Self> {
        match field {
            BindingField::DisplayName => Ok(FieldEdit::DisplayName(text.to_string())),
            BindingField::ControlType => Ok(FieldEdit::ControlType(text.parse()?)),
            BindingField::Event => Ok(FieldEdit::Event(text.parse()?)),
            BindingField::Consume => parse_flag(field, text).map(FieldEdit::Consume),
            BindingField::Produce => parse_flag(field, text).map(FieldEdit::Produce),
            BindingField::Group => parse_flag(field, text).map(FieldEdit::Group),
        }
    }

    /// Build an edit from a flattened value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`] when the value kind does not
    /// match the field, or a tag parse error for unknown tags.
    pub fn from_value(field: BindingField, value: FieldValue) -> Result<Self> {
        match (field.is_flag(), value) {
            (true, FieldValue::Flag(flag)) => Ok(match field {
                BindingField::Consume => FieldEdit::Consume(flag),
                BindingField::Produce => FieldEdit::Produce(flag),
                _ => FieldEdit::Group(flag),
            }),
            (false, FieldValue::Text(text)) => FieldEdit::parse(field, &text),
            (_, FieldValue::Flag(flag)) => Err(ModelError::InvalidValue {
                field: field.to_string(),
                value: flag.to_string(),
            }),
            (_, FieldValue::Text(text)) => Err(ModelError::InvalidValue {
                field: field.to_string(),
                value: text,
            }),
        }
    }

    pub fn field(&self) -> BindingField {
        match self {
            FieldEdit::DisplayName(_) => BindingField::DisplayName,
            FieldEdit::ControlType(_) => BindingField::ControlType,
            FieldEdit::Event(_) => BindingField::Event,
            FieldEdit::Consume(_) => BindingField::Consume,
            FieldEdit::Produce(_) => BindingField::Produce,
            FieldEdit::Group(_) => BindingField::Group,
        }
    }
}

fn parse_flag(field: BindingField, text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ModelError::InvalidValue {
            field: field.to_string(),
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::FALLBACK_MAPPING;

    #[test]
    fn new_entry_has_flags_off() {
        let entry = BindingEntry::new("ui_lbl_title", "title", FALLBACK_MAPPING);
        assert_eq!(entry.identifier(), "ui_lbl_title");
        assert!(!entry.produce && !entry.consume && !entry.group);
    }

    #[test]
    fn field_parsing_accepts_aliases() {
        assert_eq!("evt".parse::<BindingField>(), Ok(BindingField::Event));
        assert_eq!("produce".parse::<BindingField>(), Ok(BindingField::Produce));
        assert_eq!(
            "identifier".parse::<BindingField>(),
            Err(ModelError::ImmutableField("identifier".to_string()))
        );
        assert!(matches!(
            "colour".parse::<BindingField>(),
            Err(ModelError::UnknownField(_))
        ));
    }

    #[test]
    fn apply_then_value_reflects_edit() {
        let mut entry = BindingEntry::new("ui_sld_volume", "volume", FALLBACK_MAPPING);
        entry.apply(FieldEdit::parse(BindingField::ControlType, "SLIDER_CT").unwrap());
        entry.apply(FieldEdit::parse(BindingField::Produce, "yes").unwrap());
        assert_eq!(
            entry.value(BindingField::ControlType),
            FieldValue::Text("SLIDER_CT".to_string())
        );
        assert_eq!(entry.value(BindingField::Produce), FieldValue::Flag(true));
    }

    #[test]
    fn from_value_rejects_mismatched_kind() {
        let result = FieldEdit::from_value(BindingField::Group, FieldValue::Text("x".into()));
        assert!(matches!(result, Err(ModelError::InvalidValue { .. })));
        let result = FieldEdit::from_value(BindingField::DisplayName, FieldValue::Flag(true));
        assert!(matches!(result, Err(ModelError::InvalidValue { .. })));
    }

    #[test]
    fn bad_flag_text_is_rejected() {
        assert!(FieldEdit::parse(BindingField::Consume, "maybe").is_err());
    }
}
