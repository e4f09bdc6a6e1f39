//! Configuration snapshot and its flag predicates.
//!
//! A [`Configuration`] is a read-only snapshot of the UI state a toolkit
//! resolves elsewhere. This crate holds no ownership over that state: the
//! predicates are pure bit tests over the snapshot's two integer fields,
//! total over every representable value, and cannot fail.

use serde::{Deserialize, Serialize};

use crate::direction::{LayoutDirection, LAYOUT_DIRECTION_LTR, LAYOUT_DIRECTION_RTL};
use crate::ui_mode::{NightMode, UiModeType, UI_MODE_NIGHT_MASK, UI_MODE_NIGHT_YES, UI_MODE_TYPE_MASK};

/// Snapshot of the UI configuration fields this crate inspects.
///
/// Fields default to zero (all-undefined) when absent, matching the
/// toolkit's unset state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Configuration {
    /// Raw layout-direction field; 0 = LTR, 1 = RTL, other values possible
    #[serde(default)]
    pub layout_direction: u32,
    /// Raw UI-mode bitmask; see the `ui_mode` module for the bit layout
    #[serde(default)]
    pub ui_mode: u32,
}

impl Configuration {
    /// Create a snapshot from raw field values.
    pub fn new(layout_direction: u32, ui_mode: u32) -> Self {
        Self {
            layout_direction,
            ui_mode,
        }
    }

    /// True exactly when the layout-direction field holds the RTL sentinel.
    ///
    /// False for LTR and for any unrecognized value.
    pub fn is_rtl(&self) -> bool {
        self.layout_direction == LAYOUT_DIRECTION_RTL
    }

    /// True exactly when the layout-direction field holds the LTR sentinel.
    ///
    /// Not the logical negation of [`is_rtl`](Self::is_rtl): a value outside
    /// the two sentinels fails both tests.
    pub fn is_ltr(&self) -> bool {
        self.layout_direction == LAYOUT_DIRECTION_LTR
    }

    /// True exactly when the night bits of the UI-mode field hold the
    /// "night" sentinel.
    ///
    /// False for not-night, undefined, and any other masked result.
    pub fn is_night(&self) -> bool {
        self.ui_mode & UI_MODE_NIGHT_MASK == UI_MODE_NIGHT_YES
    }

    /// Typed view of the layout-direction field.
    ///
    /// `None` when the field holds neither sentinel.
    pub fn layout_direction(&self) -> Option<LayoutDirection> {
        LayoutDirection::from_raw(self.layout_direction)
    }

    /// Typed view of the night bits of the UI-mode field.
    pub fn night_mode(&self) -> NightMode {
        NightMode::from_ui_mode(self.ui_mode)
    }

    /// Typed view of the type bits of the UI-mode field.
    pub fn ui_mode_type(&self) -> UiModeType {
        UiModeType::from_ui_mode(self.ui_mode)
    }

    /// Copy of this snapshot with the layout-direction field replaced.
    pub fn with_layout_direction(self, direction: LayoutDirection) -> Self {
        Self {
            layout_direction: direction.raw(),
            ..self
        }
    }

    /// Copy of this snapshot with only the night bits replaced.
    pub fn with_night_mode(self, mode: NightMode) -> Self {
        Self {
            ui_mode: (self.ui_mode & !UI_MODE_NIGHT_MASK) | mode.bits(),
            ..self
        }
    }

    /// Copy of this snapshot with only the type bits replaced.
    pub fn with_ui_mode_type(self, ty: UiModeType) -> Self {
        Self {
            ui_mode: (self.ui_mode & !UI_MODE_TYPE_MASK) | ty.bits(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_sentinel() {
        let config = Configuration::new(LAYOUT_DIRECTION_RTL, 0);
        assert!(config.is_rtl());
        assert!(!config.is_ltr());
    }

    #[test]
    fn test_ltr_sentinel() {
        let config = Configuration::new(LAYOUT_DIRECTION_LTR, 0);
        assert!(config.is_ltr());
        assert!(!config.is_rtl());
    }

    #[test]
    fn test_direction_predicates_not_negations() {
        // Out-of-sentinel direction fails both tests
        let config = Configuration::new(7, 0);
        assert!(!config.is_rtl());
        assert!(!config.is_ltr());
        assert_eq!(config.layout_direction(), None);
    }

    #[test]
    fn test_night_sentinel() {
        let config = Configuration::new(0, 0x20);
        assert!(config.is_night());
        assert_eq!(config.night_mode(), NightMode::Yes);
    }

    #[test]
    fn test_not_night() {
        assert!(!Configuration::new(0, 0x10).is_night());
        assert!(!Configuration::new(0, 0x00).is_night());
        assert!(!Configuration::new(0, 0x30).is_night());
    }

    #[test]
    fn test_night_ignores_type_bits() {
        let config = Configuration::new(0, 0x21);
        assert!(config.is_night());
        assert_eq!(config.ui_mode_type(), UiModeType::Normal);
    }

    #[test]
    fn test_predicates_idempotent() {
        let config = Configuration::new(1, 0x20);
        assert_eq!(config.is_rtl(), config.is_rtl());
        assert_eq!(config.is_ltr(), config.is_ltr());
        assert_eq!(config.is_night(), config.is_night());
    }

    #[test]
    fn test_with_night_mode_preserves_type_bits() {
        let config = Configuration::new(0, 0x14) // not-night, television
            .with_night_mode(NightMode::Yes);
        assert!(config.is_night());
        assert_eq!(config.ui_mode_type(), UiModeType::Television);
    }

    #[test]
    fn test_with_ui_mode_type_preserves_night_bits() {
        let config = Configuration::new(0, 0x21)
            .with_ui_mode_type(UiModeType::Car);
        assert!(config.is_night());
        assert_eq!(config.ui_mode_type(), UiModeType::Car);
    }

    #[test]
    fn test_with_layout_direction() {
        let config = Configuration::default().with_layout_direction(LayoutDirection::Rtl);
        assert!(config.is_rtl());
        assert_eq!(config.ui_mode, 0);
    }

    #[test]
    fn test_serde_defaults() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
        assert!(config.is_ltr());
        assert!(!config.is_night());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Configuration::new(1, 0x26);
        let json = serde_json::to_string(&config).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
