//! Three-character name prefixes and the defaults they imply.
//!
//! A symbol named `ui_btn_submit` (with constant prefix `ui_`) carries the
//! classification prefix `btn`, which the standard table maps to
//! `BUTTON_CT` firing on `LV_EVENT_CLICKED`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::tags::{ControlType, EventCode};

/// Number of characters that make up a classification prefix.
pub const PREFIX_LEN: usize = 3;

/// Defaults applied to a symbol whose prefix is in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixMapping {
    pub control_type: ControlType,
    pub event: EventCode,
}

impl PrefixMapping {
    pub const fn new(control_type: ControlType, event: EventCode) -> Self {
        Self {
            control_type,
            event,
        }
    }
}

/// Mapping used for symbols accepted without a recognized prefix.
pub const FALLBACK_MAPPING: PrefixMapping =
    PrefixMapping::new(ControlType::Label, EventCode::ValueChanged);

const STANDARD_MAPPINGS: [(&str, PrefixMapping); 16] = [
    ("scr", PrefixMapping::new(ControlType::Screen, EventCode::Gesture)),
    ("arc", PrefixMapping::new(ControlType::Arc, EventCode::Clicked)),
    ("btn", PrefixMapping::new(ControlType::Button, EventCode::Clicked)),
    ("img", PrefixMapping::new(ControlType::ImgButton, EventCode::Clicked)),
    ("lbl", PrefixMapping::new(ControlType::Label, EventCode::ValueChanged)),
    ("pnl", PrefixMapping::new(ControlType::Button, EventCode::Clicked)),
    ("txa", PrefixMapping::new(ControlType::TextArea, EventCode::ValueChanged)),
    ("cal", PrefixMapping::new(ControlType::Calendar, EventCode::ValueChanged)),
    ("chk", PrefixMapping::new(ControlType::Checkbox, EventCode::ValueChanged)),
    ("clr", PrefixMapping::new(ControlType::ColorWheel, EventCode::ValueChanged)),
    ("cmb", PrefixMapping::new(ControlType::Dropdown, EventCode::ValueChanged)),
    ("ibt", PrefixMapping::new(ControlType::ImgButton, EventCode::Clicked)),
    ("kbd", PrefixMapping::new(ControlType::Keyboard, EventCode::Key)),
    ("rlr", PrefixMapping::new(ControlType::Roller, EventCode::ValueChanged)),
    ("sld", PrefixMapping::new(ControlType::Slider, EventCode::ValueChanged)),
    ("swt", PrefixMapping::new(ControlType::Switch, EventCode::ValueChanged)),
];

/// Prefix → defaults lookup, fixed once classification starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTypeTable {
    mappings: BTreeMap<String, PrefixMapping>,
}

impl PrefixTypeTable {
    /// An empty table; every symbol is unmapped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table shipped with the tool.
    pub fn standard() -> Self {
        let mappings = STANDARD_MAPPINGS
            .iter()
            .map(|(prefix, mapping)| ((*prefix).to_string(), *mapping))
            .collect();
        Self { mappings }
    }

    /// Add or replace a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidPrefix`] unless `prefix` is exactly
    /// [`PREFIX_LEN`] characters.
    pub fn insert(
        &mut self,
        prefix: &str,
        control_type: ControlType,
        event: EventCode,
    ) -> Result<()> {
        if prefix.chars().count() != PREFIX_LEN {
            return Err(ModelError::InvalidPrefix(prefix.to_string()));
        }
        self.mappings.insert(
            prefix.to_string(),
            PrefixMapping::new(control_type, event),
        );
        Ok(())
    }

    /// Builder form of [`PrefixTypeTable::insert`].
    pub fn with_mapping(
        mut self,
        prefix: &str,
        control_type: ControlType,
        event: EventCode,
    ) -> Result<Self> {
        self.insert(prefix, control_type, event)?;
        Ok(self)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, prefix: &str) -> Option<PrefixMapping> {
        self.mappings.get(prefix).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PrefixMapping)> {
        self.mappings
            .iter()
            .map(|(prefix, mapping)| (prefix.as_str(), *mapping))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_known_prefixes() {
        let table = PrefixTypeTable::standard();
        assert_eq!(table.len(), STANDARD_MAPPINGS.len());
        assert_eq!(
            table.lookup("btn"),
            Some(PrefixMapping::new(ControlType::Button, EventCode::Clicked))
        );
        assert_eq!(table.lookup("kbd").map(|m| m.event), Some(EventCode::Key));
        assert_eq!(table.lookup("BTN"), None);
    }

    #[test]
    fn image_and_panel_prefixes_use_host_tags() {
        let table = PrefixTypeTable::standard();
        assert_eq!(
            table.lookup("img"),
            Some(PrefixMapping::new(ControlType::ImgButton, EventCode::Clicked))
        );
        assert_eq!(
            table.lookup("pnl"),
            Some(PrefixMapping::new(ControlType::Button, EventCode::Clicked))
        );
        for (_, mapping) in table.iter() {
            assert!(ControlType::ALL.contains(&mapping.control_type));
        }
    }

    #[test]
    fn insert_rejects_wrong_length_prefix() {
        let mut table = PrefixTypeTable::empty();
        assert_eq!(
            table.insert("bt", ControlType::Button, EventCode::Clicked),
            Err(ModelError::InvalidPrefix("bt".to_string()))
        );
        assert!(table.is_empty());
    }
}
