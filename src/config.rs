//! Configuration file support.
//!
//! Every field has a default, so a partial (or empty) JSON object is a valid
//! configuration. The tuned placement and scroll constants live here so they
//! can be adjusted without a rebuild.

use std::path::Path;

use select_layout::constants::{FLIP_MIN_OVERFLOW, MENU_GUTTER, OVERSCROLL_RATIO};
use select_layout::{FlipHeuristic, MenuPlacement, ScrollIntoView};
use serde::{Deserialize, Serialize};

use crate::class_name::{ClassNames, DEFAULT_CLASS_PREFIX};
use crate::components::DEFAULT_MAX_MENU_HEIGHT;
use crate::error::{ConfigError, ConfigResult};
use crate::theme::Theme;

/// Log level setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Settings for the menu components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Prefix of every generated class name
    pub class_prefix: String,

    /// Requested side for the first paint
    pub menu_placement: MenuPlacement,

    /// Re-decide the side after the menu is mounted
    pub menu_should_flip: bool,

    /// Gap between the control and the menu, in pixels
    pub menu_gutter: f32,

    /// Overflow tolerated before flipping, in pixels
    pub flip_min_overflow: f32,

    /// Fraction of the focused option's height kept visible past it
    pub overscroll_ratio: f32,

    /// Maximum height of the menu list, in pixels
    pub max_menu_height: f32,

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            menu_placement: MenuPlacement::Bottom,
            menu_should_flip: true,
            menu_gutter: MENU_GUTTER,
            flip_min_overflow: FLIP_MIN_OVERFLOW,
            overscroll_ratio: OVERSCROLL_RATIO,
            max_menu_height: DEFAULT_MAX_MENU_HEIGHT,
            log_level: LogLevel::default(),
        }
    }
}

impl SelectConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: SelectConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded select config from {:?}", path);
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }
        if self.class_prefix.trim().is_empty() {
            return Err(invalid("class_prefix", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.overscroll_ratio) {
            return Err(invalid(
                "overscroll_ratio",
                format!("{} is outside 0.0..=1.0", self.overscroll_ratio),
            ));
        }
        non_negative("menu_gutter", self.menu_gutter)?;
        non_negative("flip_min_overflow", self.flip_min_overflow)?;
        non_negative("max_menu_height", self.max_menu_height)?;
        Ok(())
    }

    pub fn class_names(&self) -> ClassNames {
        ClassNames::new(self.class_prefix.clone())
    }

    pub fn flip_heuristic(&self) -> FlipHeuristic {
        FlipHeuristic::new()
            .gutter(self.menu_gutter)
            .min_overflow(self.flip_min_overflow)
    }

    pub fn scroller(&self) -> ScrollIntoView {
        ScrollIntoView::new(self.overscroll_ratio)
    }

    /// Default theme with this config's gutter.
    pub fn theme(&self) -> Theme {
        Theme::default().with_menu_gutter(self.menu_gutter)
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        message: message.into(),
    }
}

fn non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{} must be finite and non-negative", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SelectConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.class_prefix, "react-select");
        assert_eq!(config.menu_placement, MenuPlacement::Bottom);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SelectConfig::from_json("{}").ok();
        assert_eq!(config, Some(SelectConfig::default()));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "class_prefix": "picker", "menu_placement": "auto", "log_level": "debug" }"#;
        let config = match SelectConfig::from_json(json) {
            Ok(config) => config,
            Err(e) => panic!("config should parse: {}", e),
        };
        assert_eq!(config.class_prefix, "picker");
        assert_eq!(config.menu_placement, MenuPlacement::Auto);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.class_names().build("menu", &[]), "picker__menu");
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SelectConfig {
            menu_gutter: 12.0,
            menu_should_flip: false,
            ..SelectConfig::default()
        };
        let json = config.to_json().unwrap_or_default();
        assert_eq!(SelectConfig::from_json(&json).ok(), Some(config));
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let err = SelectConfig::from_json(r#"{ "overscroll_ratio": 1.5 }"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { field: "overscroll_ratio", .. })
        ));
    }

    #[test]
    fn test_negative_gutter_rejected() {
        let err = SelectConfig::from_json(r#"{ "menu_gutter": -1.0 }"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { field: "menu_gutter", .. })
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = SelectConfig::from_json(r#"{ "class_prefix": " " }"#);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { field: "class_prefix", .. })
        ));
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = SelectConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(err, Err(ConfigError::UnsupportedVersion { found: 99, .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SelectConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("select_menu_missing_config.json");
        assert!(matches!(SelectConfig::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "select_menu_config_{}.json",
            std::process::id()
        ));
        let written = std::fs::write(&path, r#"{ "max_menu_height": 180.0 }"#);
        assert!(written.is_ok());
        let config = SelectConfig::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.ok().map(|c| c.max_menu_height), Some(180.0));
    }

    #[test]
    fn test_derived_helpers() {
        let config = SelectConfig {
            menu_gutter: 6.0,
            overscroll_ratio: 0.5,
            ..SelectConfig::default()
        };
        assert_eq!(config.flip_heuristic().gutter, 6.0);
        assert_eq!(config.scroller().overscroll_ratio, 0.5);
        assert_eq!(config.theme().spacing.menu_gutter, 6.0);
    }
}
