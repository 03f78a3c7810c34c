//! Tag vocabularies shared with the host runtime.
//!
//! Both enums render to the exact enumerator names the generated code
//! passes to `AddProducer` / `AddConsumer`, so the wire tag is also the
//! persisted value and the display value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Widget category of a bound symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControlType {
    #[serde(rename = "SCREEN_CT")]
    Screen,
    #[serde(rename = "ARC_CT")]
    Arc,
    #[serde(rename = "BUTTON_CT")]
    Button,
    #[serde(rename = "LABEL_CT")]
    Label,
    #[serde(rename = "TEXTAREA_CT")]
    TextArea,
    #[serde(rename = "CALENDAR_CT")]
    Calendar,
    #[serde(rename = "CHECKBOX_CT")]
    Checkbox,
    #[serde(rename = "COLORWHEEL_CT")]
    ColorWheel,
    #[serde(rename = "DROPDOWN_CT")]
    Dropdown,
    #[serde(rename = "ROLLER_CT")]
    Roller,
    #[serde(rename = "IMGBUTTON_CT")]
    ImgButton,
    #[serde(rename = "KEYBOARD_CT")]
    Keyboard,
    #[serde(rename = "SLIDER_CT")]
    Slider,
    #[serde(rename = "SWITCH_CT")]
    Switch,
}

impl ControlType {
    pub const ALL: [ControlType; 14] = [
        ControlType::Screen,
        ControlType::Arc,
        ControlType::Button,
        ControlType::Label,
        ControlType::TextArea,
        ControlType::Calendar,
        ControlType::Checkbox,
        ControlType::ColorWheel,
        ControlType::Dropdown,
        ControlType::Roller,
        ControlType::ImgButton,
        ControlType::Keyboard,
        ControlType::Slider,
        ControlType::Switch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlType::Screen => "SCREEN_CT",
            ControlType::Arc => "ARC_CT",
            ControlType::Button => "BUTTON_CT",
            ControlType::Label => "LABEL_CT",
            ControlType::TextArea => "TEXTAREA_CT",
            ControlType::Calendar => "CALENDAR_CT",
            ControlType::Checkbox => "CHECKBOX_CT",
            ControlType::ColorWheel => "COLORWHEEL_CT",
            ControlType::Dropdown => "DROPDOWN_CT",
            ControlType::Roller => "ROLLER_CT",
            ControlType::ImgButton => "IMGBUTTON_CT",
            ControlType::Keyboard => "KEYBOARD_CT",
            ControlType::Slider => "SLIDER_CT",
            ControlType::Switch => "SWITCH_CT",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ModelError::UnknownControlType(s.to_string()))
    }
}

/// Runtime trigger that fires a producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCode {
    #[serde(rename = "LV_EVENT_PRESSED")]
    Pressed,
    #[serde(rename = "LV_EVENT_PRESSING")]
    Pressing,
    #[serde(rename = "LV_EVENT_PRESS_LOST")]
    PressLost,
    #[serde(rename = "LV_EVENT_SHORT_CLICKED")]
    ShortClicked,
    #[serde(rename = "LV_EVENT_LONG_PRESSED")]
    LongPressed,
    #[serde(rename = "LV_EVENT_LONG_PRESSED_REPEAT")]
    LongPressedRepeat,
    #[serde(rename = "LV_EVENT_CLICKED")]
    Clicked,
    #[serde(rename = "LV_EVENT_RELEASED")]
    Released,
    #[serde(rename = "LV_EVENT_GESTURE")]
    Gesture,
    #[serde(rename = "LV_EVENT_KEY")]
    Key,
    #[serde(rename = "LV_EVENT_FOCUSED")]
    Focused,
    #[serde(rename = "LV_EVENT_DEFOCUSED")]
    Defocused,
    #[serde(rename = "LV_EVENT_LEAVE")]
    Leave,
    #[serde(rename = "LV_EVENT_VALUE_CHANGED")]
    ValueChanged,
    #[serde(rename = "LV_EVENT_REFRESH")]
    Refresh,
    #[serde(rename = "LV_EVENT_DELETE")]
    Delete,
}

impl EventCode {
    pub const ALL: [EventCode; 16] = [
        EventCode::Pressed,
        EventCode::Pressing,
        EventCode::PressLost,
        EventCode::ShortClicked,
        EventCode::LongPressed,
        EventCode::LongPressedRepeat,
        EventCode::Clicked,
        EventCode::Released,
        EventCode::Gesture,
        EventCode::Key,
        EventCode::Focused,
        EventCode::Defocused,
        EventCode::Leave,
        EventCode::ValueChanged,
        EventCode::Refresh,
        EventCode::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventCode::Pressed => "LV_EVENT_PRESSED",
            EventCode::Pressing => "LV_EVENT_PRESSING",
            EventCode::PressLost => "LV_EVENT_PRESS_LOST",
            EventCode::ShortClicked => "LV_EVENT_SHORT_CLICKED",
            EventCode::LongPressed => "LV_EVENT_LONG_PRESSED",
            EventCode::LongPressedRepeat => "LV_EVENT_LONG_PRESSED_REPEAT",
            EventCode::Clicked => "LV_EVENT_CLICKED",
            EventCode::Released => "LV_EVENT_RELEASED",
            EventCode::Gesture => "LV_EVENT_GESTURE",
            EventCode::Key => "LV_EVENT_KEY",
            EventCode::Focused => "LV_EVENT_FOCUSED",
            EventCode::Defocused => "LV_EVENT_DEFOCUSED",
            EventCode::Leave => "LV_EVENT_LEAVE",
            EventCode::ValueChanged => "LV_EVENT_VALUE_CHANGED",
            EventCode::Refresh => "LV_EVENT_REFRESH",
            EventCode::Delete => "LV_EVENT_DELETE",
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCode::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ModelError::UnknownEvent(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_type_tags_parse_back() {
        for tag in ControlType::ALL {
            assert_eq!(tag.as_str().parse::<ControlType>().unwrap(), tag);
        }
    }

    #[test]
    fn tag_matching_is_case_sensitive() {
        assert!("button_ct".parse::<ControlType>().is_err());
        assert!("lv_event_clicked".parse::<EventCode>().is_err());
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&EventCode::ValueChanged).unwrap();
        assert_eq!(json, "\"LV_EVENT_VALUE_CHANGED\"");
    }
}
