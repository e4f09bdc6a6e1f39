//! Typed layout-direction view and its raw sentinels.

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Raw sentinel: content flows left-to-right.
pub const LAYOUT_DIRECTION_LTR: u32 = 0;
/// Raw sentinel: content flows right-to-left.
pub const LAYOUT_DIRECTION_RTL: u32 = 1;

/// Resolved layout direction of UI content.
///
/// The raw field admits values outside the two sentinels; those map to
/// `None` in [`LayoutDirection::from_raw`] rather than to either variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    /// Interpret a raw layout-direction field value.
    ///
    /// Returns `None` for anything other than the two sentinels.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            LAYOUT_DIRECTION_LTR => Some(LayoutDirection::Ltr),
            LAYOUT_DIRECTION_RTL => Some(LayoutDirection::Rtl),
            _ => None,
        }
    }

    /// The raw sentinel value for this direction.
    pub fn raw(&self) -> u32 {
        match self {
            LayoutDirection::Ltr => LAYOUT_DIRECTION_LTR,
            LayoutDirection::Rtl => LAYOUT_DIRECTION_RTL,
        }
    }
}

impl FromStr for LayoutDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ltr" => Ok(LayoutDirection::Ltr),
            "rtl" => Ok(LayoutDirection::Rtl),
            other => bail!("unknown layout direction '{}' (expected ltr or rtl)", other),
        }
    }
}

impl Display for LayoutDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDirection::Ltr => write!(f, "ltr"),
            LayoutDirection::Rtl => write!(f, "rtl"),
        }
    }
}
