//! Configuration management and validation.
//!
//! Provides configuration structures for the CSV loader and for station file
//! discovery, loaded in layers: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI.

use crate::constants::{
    APP_CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_DATE_FORMATS, DEFAULT_DELIMITER,
    DEFAULT_FILE_PATTERN, DEFAULT_TRACE_MARKER,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for parsing station CSV files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Cell text marking a trace amount (compared case-insensitively)
    pub trace_marker: String,

    /// chrono format strings tried in order for the date column
    ///
    /// The first format that parses a loaded row is used for the rest of that file.
    pub date_formats: Vec<String>,

    /// Field delimiter
    pub delimiter: char,

    /// Treat empty precipitation cells as absent instead of rejecting the row
    pub allow_missing_precipitation: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            trace_marker: DEFAULT_TRACE_MARKER.to_string(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            delimiter: DEFAULT_DELIMITER,
            allow_missing_precipitation: false,
        }
    }
}

impl LoaderConfig {
    /// Delimiter as the single byte expected by the csv reader
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|byte| byte.is_ascii())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Delimiter '{}' must be a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

/// Settings for finding station files inside a region directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Glob pattern matched against file names
    pub file_pattern: String,

    /// Descend into subdirectories
    pub recursive: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            recursive: false,
        }
    }
}

/// Global configuration for weather history loading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderConfig,
    pub discovery: DiscoveryConfig,
}

impl Config {
    /// Default configuration file location under the platform config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load defaults layered with an explicit or default config file
    ///
    /// An explicit path must exist. The default location is only used when a
    /// file is actually present there.
    pub fn load_layered(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            debug!("Loading config file: {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => {
                debug!("Loading default config file: {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.loader.trace_marker.trim().is_empty() {
            return Err(Error::configuration("Trace marker cannot be empty"));
        }

        if self.loader.date_formats.is_empty() {
            return Err(Error::configuration(
                "At least one date format must be configured",
            ));
        }

        self.loader.delimiter_byte()?;
        glob::Pattern::new(&self.discovery.file_pattern)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.loader.trace_marker, "T");
        assert_eq!(config.loader.delimiter, ',');
        assert_eq!(config.discovery.file_pattern, "*.csv");
        assert!(!config.discovery.recursive);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [loader]
            trace_marker = "TR"
            "#,
        )
        .unwrap();

        assert_eq!(config.loader.trace_marker, "TR");
        assert_eq!(config.loader.date_formats.len(), DEFAULT_DATE_FORMATS.len());
        assert_eq!(config.discovery, DiscoveryConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            r#"
            [loader]
            trace_marker = "t"
            date_formats = ["%Y%m%d"]
            delimiter = ";"
            allow_missing_precipitation = true

            [discovery]
            file_pattern = "station_*.txt"
            recursive = true
            "#,
        )
        .unwrap();

        assert_eq!(config.loader.delimiter_byte().unwrap(), b';');
        assert!(config.loader.allow_missing_precipitation);
        assert_eq!(config.discovery.file_pattern, "station_*.txt");
        assert!(config.discovery.recursive);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::from_toml_str("[loader]\ntrace_marker = \"  \""),
            Err(Error::Configuration { .. })
        ));
        assert!(Config::from_toml_str("[loader]\ndate_formats = []").is_err());
        assert!(Config::from_toml_str("[loader]\ndelimiter = \"é\"").is_err());
        assert!(Config::from_toml_str("[discovery]\nfile_pattern = \"[\"").is_err());
        assert!(Config::from_toml_str("loader = 5").is_err());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[discovery]\nrecursive = true\n").unwrap();

        let config = Config::load_layered(Some(&path)).unwrap();
        assert!(config.discovery.recursive);

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_layered(Some(&missing)),
            Err(Error::FileNotFound { .. })
        ));
    }
}
