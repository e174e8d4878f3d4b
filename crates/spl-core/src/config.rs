// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Color, Orientation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial orientation of the root split view
    pub orientation: Orientation,

    /// Divider thickness along the split axis, in pixels
    pub divider_thickness: f32,

    /// Divider fill color
    pub divider_color: Color,

    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            divider_thickness: 10.0,
            divider_color: Color::SEPARATOR,
            window_width: 1200,
            window_height: 800,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/split-pane/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("split-pane").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.divider_thickness, 10.0);
        assert_eq!(config.divider_color, Color::SEPARATOR);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.orientation = Orientation::Vertical;
        config.divider_thickness = 4.0;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "split-pane-config-test-{}.toml",
            std::process::id()
        ));
        let mut config = Config::default();
        config.orientation = Orientation::Vertical;
        config.window_width = 640;

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("divider_thickness = 6.0\n").unwrap();
        assert_eq!(parsed.divider_thickness, 6.0);
        assert_eq!(parsed.orientation, Orientation::Horizontal);
        assert_eq!(parsed.window_width, 1200);
    }
}
