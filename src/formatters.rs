//! Output formatters for configuration snapshots
//!
//! Provides formatters that transform a Configuration and its predicate
//! results into terminal text or JSON output.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use serde_json::json;

use crate::configuration::Configuration;
use crate::direction::LayoutDirection;
use crate::ui_mode::NightMode;

/// Format a Configuration as multi-section text output
pub fn format_regular_report(config: &Configuration) -> String {
    let direction = match config.layout_direction() {
        Some(d) => d.to_string(),
        None => "unrecognized".to_string(),
    };

    let output = vec![
        "Configuration".bold().to_string(),
        "=============".to_string(),
        String::new(),
        format!(
            "  {:<18} {} (raw {:#x})",
            "Layout direction:", direction, config.layout_direction
        ),
        format!("  {:<18} {}", "is_rtl:", format_bool(config.is_rtl())),
        format!("  {:<18} {}", "is_ltr:", format_bool(config.is_ltr())),
        String::new(),
        format!("  {:<18} {:#x}", "UI mode:", config.ui_mode),
        format!("  {:<18} {}", "Type:", config.ui_mode_type()),
        format!("  {:<18} {}", "Night:", config.night_mode()),
        format!("  {:<18} {}", "is_night:", format_bool(config.is_night())),
    ];

    output.join("\n")
}

/// Format a Configuration as a JSON report
pub fn format_json_report(config: &Configuration) -> Result<String> {
    let report = json!({
        "layout_direction": {
            "raw": config.layout_direction,
            "resolved": config.layout_direction(),
            "is_rtl": config.is_rtl(),
            "is_ltr": config.is_ltr(),
        },
        "ui_mode": {
            "raw": config.ui_mode,
            "type": config.ui_mode_type(),
            "night": config.night_mode(),
            "is_night": config.is_night(),
        },
    });

    serde_json::to_string_pretty(&report).context("failed to serialize report")
}

/// Format a boolean predicate result with color
fn format_bool(value: bool) -> String {
    if value {
        "true".green().to_string()
    } else {
        "false".dimmed().to_string()
    }
}

/// Parse a layout-direction CLI value: a name (ltr/rtl) or a raw integer
pub fn parse_direction_value(s: &str) -> Result<u32> {
    if let Ok(direction) = s.parse::<LayoutDirection>() {
        return Ok(direction.raw());
    }
    parse_raw_value(s)
        .map_err(|_| anyhow!("invalid layout direction '{}' (expected ltr, rtl, or an integer)", s))
}

/// Parse a UI-mode CLI value: a night-mode name or a raw integer
pub fn parse_ui_mode_value(s: &str) -> Result<u32> {
    if let Ok(mode) = s.parse::<NightMode>() {
        return Ok(mode.bits());
    }
    parse_raw_value(s)
        .map_err(|_| anyhow!("invalid ui mode '{}' (expected a night-mode name or an integer)", s))
}

/// Parse a raw integer value, accepting decimal or 0x-prefixed hex
fn parse_raw_value(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).with_context(|| format!("invalid hex value '{}'", s))
    } else {
        s.parse::<u32>()
            .with_context(|| format!("invalid integer value '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_value() {
        assert_eq!(parse_raw_value("0").unwrap(), 0);
        assert_eq!(parse_raw_value("32").unwrap(), 32);
        assert_eq!(parse_raw_value("0x20").unwrap(), 0x20);
        assert_eq!(parse_raw_value("0X30").unwrap(), 0x30);
        assert!(parse_raw_value("night?").is_err());
    }

    #[test]
    fn test_parse_direction_value() {
        assert_eq!(parse_direction_value("rtl").unwrap(), 1);
        assert_eq!(parse_direction_value("LTR").unwrap(), 0);
        assert_eq!(parse_direction_value("1").unwrap(), 1);
        assert!(parse_direction_value("sideways").is_err());
    }

    #[test]
    fn test_parse_ui_mode_value() {
        assert_eq!(parse_ui_mode_value("night").unwrap(), 0x20);
        assert_eq!(parse_ui_mode_value("no").unwrap(), 0x10);
        assert_eq!(parse_ui_mode_value("0x21").unwrap(), 0x21);
        assert!(parse_ui_mode_value("dusk").is_err());
    }

    #[test]
    fn test_format_regular_report_contains_results() {
        let config = Configuration::new(1, 0x20);
        let report = format_regular_report(&config);
        assert!(report.contains("rtl"));
        assert!(report.contains("is_rtl:"));
        assert!(report.contains("is_night:"));
        assert!(report.contains("0x20"));
    }

    #[test]
    fn test_format_regular_report_unrecognized_direction() {
        let config = Configuration::new(5, 0);
        let report = format_regular_report(&config);
        assert!(report.contains("unrecognized"));
    }

    #[test]
    fn test_format_json_report() {
        let config = Configuration::new(1, 0x20);
        let report = format_json_report(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["layout_direction"]["is_rtl"], true);
        assert_eq!(value["layout_direction"]["resolved"], "rtl");
        assert_eq!(value["ui_mode"]["night"], "yes");
        assert_eq!(value["ui_mode"]["is_night"], true);
    }
}
