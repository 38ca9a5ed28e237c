use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::logging::LogConfig;
use crate::models::Locale;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How summaries are rendered
    pub display: DisplaySettings,

    /// Logging setup
    pub logging: LogConfig,
}

/// Summary rendering preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Label language
    pub locale: Locale,

    /// Output format (text, json, table)
    pub format: ExportFormat,
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Serialize to a pretty TOML document
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration to TOML")
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trainmeter")
            .join("config.toml")
    }

    /// Load from `path`, or the default location, falling back to defaults.
    ///
    /// An explicitly given path that cannot be loaded is an error; a missing
    /// default file is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let config_path = Self::default_config_path();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Config file unreadable, using defaults"
                );
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = config.to_toml().unwrap();
        let deserialized: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("[display]\nlocale = \"ru\"\n").unwrap();

        assert_eq!(config.display.locale, Locale::Russian);
        assert_eq!(config.display.format, ExportFormat::Text);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_config_file_io() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut original = AppConfig::default();
        original.display.format = ExportFormat::Table;
        original.logging.level = LogLevel::Debug;
        original.save_to_file(&config_path).unwrap();

        let loaded = AppConfig::load_or_default(Some(&config_path)).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(AppConfig::load_or_default(Some(&missing)).is_err());
    }
}
