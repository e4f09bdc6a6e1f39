//! UI-mode bit layout: night-mode and device-type sub-ranges.
//!
//! The UI-mode field packs several independent display-mode flags into one
//! integer. Two sub-ranges matter here: the low nibble encodes the device
//! type, and bits 4-5 encode night-mode state. The layout follows the host
//! toolkit's convention, so raw values can be passed through unchanged.

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Bits of the UI-mode field that encode the device type.
pub const UI_MODE_TYPE_MASK: u32 = 0x0f;
pub const UI_MODE_TYPE_UNDEFINED: u32 = 0x00;
pub const UI_MODE_TYPE_NORMAL: u32 = 0x01;
pub const UI_MODE_TYPE_DESK: u32 = 0x02;
pub const UI_MODE_TYPE_CAR: u32 = 0x03;
pub const UI_MODE_TYPE_TELEVISION: u32 = 0x04;
pub const UI_MODE_TYPE_APPLIANCE: u32 = 0x05;
pub const UI_MODE_TYPE_WATCH: u32 = 0x06;
pub const UI_MODE_TYPE_VR_HEADSET: u32 = 0x07;

/// Bits of the UI-mode field that encode night-mode state.
pub const UI_MODE_NIGHT_MASK: u32 = 0x30;
pub const UI_MODE_NIGHT_UNDEFINED: u32 = 0x00;
pub const UI_MODE_NIGHT_NO: u32 = 0x10;
pub const UI_MODE_NIGHT_YES: u32 = 0x20;

/// Night-mode state carried in the UI-mode field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NightMode {
    #[default]
    Undefined,
    No,
    Yes,
}

impl NightMode {
    /// Extract the night-mode state from a raw UI-mode value.
    ///
    /// Any masked result other than the no/yes sentinels (including the
    /// invalid combination with both night bits set) reads as `Undefined`.
    pub fn from_ui_mode(ui_mode: u32) -> Self {
        match ui_mode & UI_MODE_NIGHT_MASK {
            UI_MODE_NIGHT_NO => NightMode::No,
            UI_MODE_NIGHT_YES => NightMode::Yes,
            _ => NightMode::Undefined,
        }
    }

    /// The raw sentinel bits for this state.
    pub fn bits(&self) -> u32 {
        match self {
            NightMode::Undefined => UI_MODE_NIGHT_UNDEFINED,
            NightMode::No => UI_MODE_NIGHT_NO,
            NightMode::Yes => UI_MODE_NIGHT_YES,
        }
    }
}

impl FromStr for NightMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undefined" => Ok(NightMode::Undefined),
            "no" => Ok(NightMode::No),
            "yes" | "night" => Ok(NightMode::Yes),
            other => bail!("unknown night mode '{}' (expected undefined, no, or yes)", other),
        }
    }
}

impl Display for NightMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NightMode::Undefined => write!(f, "undefined"),
            NightMode::No => write!(f, "no"),
            NightMode::Yes => write!(f, "yes"),
        }
    }
}

/// Device type carried in the low nibble of the UI-mode field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UiModeType {
    #[default]
    Undefined,
    Normal,
    Desk,
    Car,
    Television,
    Appliance,
    Watch,
    VrHeadset,
}

impl UiModeType {
    /// Extract the device type from a raw UI-mode value.
    ///
    /// Unrecognized type bits read as `Undefined`.
    pub fn from_ui_mode(ui_mode: u32) -> Self {
        match ui_mode & UI_MODE_TYPE_MASK {
            UI_MODE_TYPE_NORMAL => UiModeType::Normal,
            UI_MODE_TYPE_DESK => UiModeType::Desk,
            UI_MODE_TYPE_CAR => UiModeType::Car,
            UI_MODE_TYPE_TELEVISION => UiModeType::Television,
            UI_MODE_TYPE_APPLIANCE => UiModeType::Appliance,
            UI_MODE_TYPE_WATCH => UiModeType::Watch,
            UI_MODE_TYPE_VR_HEADSET => UiModeType::VrHeadset,
            _ => UiModeType::Undefined,
        }
    }

    /// The raw type bits for this device type.
    pub fn bits(&self) -> u32 {
        match self {
            UiModeType::Undefined => UI_MODE_TYPE_UNDEFINED,
            UiModeType::Normal => UI_MODE_TYPE_NORMAL,
            UiModeType::Desk => UI_MODE_TYPE_DESK,
            UiModeType::Car => UI_MODE_TYPE_CAR,
            UiModeType::Television => UI_MODE_TYPE_TELEVISION,
            UiModeType::Appliance => UI_MODE_TYPE_APPLIANCE,
            UiModeType::Watch => UI_MODE_TYPE_WATCH,
            UiModeType::VrHeadset => UI_MODE_TYPE_VR_HEADSET,
        }
    }
}

impl Display for UiModeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            UiModeType::Undefined => "undefined",
            UiModeType::Normal => "normal",
            UiModeType::Desk => "desk",
            UiModeType::Car => "car",
            UiModeType::Television => "television",
            UiModeType::Appliance => "appliance",
            UiModeType::Watch => "watch",
            UiModeType::VrHeadset => "vr_headset",
        };
        write!(f, "{}", name)
    }
}
