// ABOUTME: User configuration handling.
// ABOUTME: Loads and saves contrast and cursor settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::contrast::{DEFAULT_CONTRAST_RATIO, MAX_CONTRAST_RATIO, MIN_CONTRAST_RATIO};

/// Inset kept from a screen's max edges when a cursor move is clamped (1/512)
pub const DEFAULT_EDGE_INSET: f64 = 0.01953125;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastSettings {
    /// Ratio used when a caller does not ask for one (1.0 to 21.0)
    pub default_ratio: f64,
}

impl ContrastSettings {
    /// The configured ratio, clamped to the valid 1..=21 range
    pub fn ratio(&self) -> f64 {
        self.default_ratio.clamp(MIN_CONTRAST_RATIO, MAX_CONTRAST_RATIO)
    }
}

impl Default for ContrastSettings {
    fn default() -> Self {
        Self {
            default_ratio: DEFAULT_CONTRAST_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    /// Distance kept from the right and top screen edges when clamping
    pub edge_inset: f64,

    /// Offset in points applied by a single move when none is given
    pub step: f64,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            edge_inset: DEFAULT_EDGE_INSET,
            step: 10.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub contrast: ContrastSettings,
    pub cursor: CursorSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Get the default config file path (~/.config/cocoa-extended/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cocoa-extended").join("config.toml"))
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.contrast.default_ratio = 4.5;
        config.cursor.step = 25.0;

        let temp_path =
            std::env::temp_dir().join(format!("cx_core_test_config_{}.toml", std::process::id()));
        config.save(&temp_path).unwrap();
        let loaded = Config::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[contrast]\ndefault_ratio = 3.0\n").unwrap();
        assert_eq!(config.contrast.default_ratio, 3.0);
        assert_eq!(config.cursor, CursorSettings::default());
        assert_eq!(config.cursor.edge_inset, 0.01953125);
    }

    #[test]
    fn test_ratio_is_clamped() {
        let settings = ContrastSettings { default_ratio: 40.0 };
        assert_eq!(settings.ratio(), 21.0);
        let settings = ContrastSettings { default_ratio: 0.0 };
        assert_eq!(settings.ratio(), 1.0);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let temp_path = std::env::temp_dir()
            .join(format!("cx_core_test_bad_config_{}.toml", std::process::id()));
        std::fs::write(&temp_path, "contrast = [").unwrap();
        assert!(matches!(
            Config::load(&temp_path),
            Err(ConfigError::ParseError(_))
        ));
        let _ = std::fs::remove_file(&temp_path);
    }
}
