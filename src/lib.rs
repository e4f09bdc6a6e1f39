//! # Uiconf - UI Configuration Flag Inspection
//!
//! Uiconf provides read-only predicates over a UI configuration snapshot:
//! layout direction (left-to-right vs right-to-left) and night mode.
//!
//! ## Overview
//!
//! A [`configuration::Configuration`] is a plain value object carrying the
//! raw integer fields a UI toolkit resolves elsewhere: a layout-direction
//! sentinel and a UI-mode bitmask. This crate never computes or mutates
//! those fields; it only performs bit tests against the toolkit's
//! sentinel/bitmask convention.
//!
//! ## Core Concepts
//!
//! - **Layout direction**: exact-match comparison against the LTR/RTL
//!   sentinels. The two predicates are not negations of each other when the
//!   field holds an out-of-sentinel value.
//! - **UI mode**: a bitmask with a type sub-range and a night sub-range.
//!   Night mode is a mask-then-match test, total over all inputs.
//!
//! ## Modules
//!
//! - [`configuration`] - Configuration snapshot and the three predicates
//! - [`direction`] - Typed layout-direction view and its sentinels
//! - [`ui_mode`] - UI-mode bit layout, night-mode and type views
//! - [`formatters`] - Terminal rendering of snapshots and predicate results
//!
//! ## Example
//!
//! ```
//! use uiconf::configuration::Configuration;
//! use uiconf::ui_mode::UI_MODE_NIGHT_YES;
//!
//! let config = Configuration::new(1, UI_MODE_NIGHT_YES);
//! assert!(config.is_rtl());
//! assert!(!config.is_ltr());
//! assert!(config.is_night());
//! ```

// Re-export all public modules
pub mod configuration;
pub mod direction;
pub mod formatters;
pub mod ui_mode;
