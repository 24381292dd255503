// Drag-select configuration: TOML parsing with defaults for missing keys,
// plus range validation of the hotspot geometry.

use serde::Deserialize;
use std::path::Path;

/// Drag-select configuration, typically embedded in the host application's
/// settings file as its own table.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSelectConfig {
    /// Height of the auto-scroll hotspot bands. `None` disables hotspots.
    pub hotspot_height: Option<f32>,
    /// Gap between the viewport's top edge and the top band.
    pub hotspot_offset_top: f32,
    /// Gap between the viewport's bottom edge and the bottom band.
    pub hotspot_offset_bottom: f32,
    /// Maximum number of selected items. `None` = unbounded.
    pub max_selection_count: Option<usize>,
    /// Suggested period for the host's auto-scroll timer, in milliseconds.
    pub auto_scroll_interval_ms: u64,
}

impl Default for DragSelectConfig {
    fn default() -> Self {
        Self {
            hotspot_height: Some(100.0),
            hotspot_offset_top: 0.0,
            hotspot_offset_bottom: 0.0,
            max_selection_count: None,
            auto_scroll_interval_ms: 25,
        }
    }
}

/// Errors that can occur during config loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
}

// ── Serde intermediate struct ────────────────────────────────────────────

/// In the file, a negative `hotspot_height` disables hotspots (TOML has no
/// way to write `None` explicitly).
#[derive(Deserialize)]
#[serde(default)]
struct RawDragSelectConfig {
    hotspot_height: f32,
    hotspot_offset_top: f32,
    hotspot_offset_bottom: f32,
    max_selection_count: Option<usize>,
    auto_scroll_interval_ms: u64,
}

impl Default for RawDragSelectConfig {
    fn default() -> Self {
        Self {
            hotspot_height: 100.0,
            hotspot_offset_top: 0.0,
            hotspot_offset_bottom: 0.0,
            max_selection_count: None,
            auto_scroll_interval_ms: 25,
        }
    }
}

// ── Config implementation ────────────────────────────────────────────────

impl DragSelectConfig {
    /// Load config from a TOML file path. Returns defaults if the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Parse a TOML string into a DragSelectConfig.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawDragSelectConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let config = Self {
            hotspot_height: if raw.hotspot_height < 0.0 {
                None
            } else {
                Some(raw.hotspot_height)
            },
            hotspot_offset_top: raw.hotspot_offset_top,
            hotspot_offset_bottom: raw.hotspot_offset_bottom,
            max_selection_count: raw.max_selection_count,
            auto_scroll_interval_ms: raw.auto_scroll_interval_ms,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the config, returning an error if any values are out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(height) = self.hotspot_height {
            if !height.is_finite() {
                return Err(ConfigError::Validation(
                    "hotspot height must be finite".to_string(),
                ));
            }
        }

        if !self.hotspot_offset_top.is_finite() || self.hotspot_offset_top < 0.0 {
            return Err(ConfigError::Validation(
                "hotspot top offset must be >= 0".to_string(),
            ));
        }

        if !self.hotspot_offset_bottom.is_finite() || self.hotspot_offset_bottom < 0.0 {
            return Err(ConfigError::Validation(
                "hotspot bottom offset must be >= 0".to_string(),
            ));
        }

        if self.auto_scroll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "auto-scroll interval must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
