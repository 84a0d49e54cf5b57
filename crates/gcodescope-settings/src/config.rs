//! Configuration for GCodeScope
//!
//! Supports JSON and TOML files. Configuration is organized into sections:
//! - Scale defaults (per-axis factors applied when none are given)
//! - Viewer preferences (grid, bounding rectangle, raster, trace size)

use gcodescope_core::constants::{
    DEFAULT_RASTER_SPACING, DEFAULT_TRACE_LIMIT, MAX_RASTER_SPACING, MIN_RASTER_SPACING,
};
use gcodescope_core::ScaleFactors;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "gcodescope";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Viewer preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Grid spacing in millimetres
    pub raster_spacing: u32,
    /// Draw the background grid
    pub show_grid: bool,
    /// Draw the bounding rectangle with dimensions
    pub show_bounding_rect: bool,
    /// Maximum moves kept in a debug trace
    pub trace_limit: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            raster_spacing: DEFAULT_RASTER_SPACING,
            show_grid: false,
            show_bounding_rect: false,
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default scale factors
    pub scale: ScaleFactors,
    /// Viewer preferences
    pub viewer: ViewerSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/gcodescope/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load an explicit file, or the default location if it exists, or defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.is_file() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scale.validate()?;

        let spacing = self.viewer.raster_spacing;
        if !(MIN_RASTER_SPACING..=MAX_RASTER_SPACING).contains(&spacing) {
            return Err(ConfigError::ValueOutOfRange {
                key: "viewer.raster_spacing".to_string(),
                value: spacing.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert!(config.scale.is_identity());
        assert_eq!(config.viewer.raster_spacing, 10);
        assert_eq!(config.viewer.trace_limit, 20);
        assert!(!config.viewer.show_grid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.scale = ScaleFactors::new(2.0, 0.5, 1.0);
        config.viewer.show_grid = true;
        config.viewer.raster_spacing = 5;
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"viewer": {"show_bounding_rect": true}}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(config.viewer.show_bounding_rect);
        assert_eq!(config.viewer.raster_spacing, 10);
        assert!(config.scale.is_identity());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let err = Config::new().save_to_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_invalid_raster_rejected() {
        let mut config = Config::new();
        config.viewer.raster_spacing = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_or_default(Some(&path)),
            Err(SettingsError::LoadError(_))
        ));
    }
}
