//! Runtime configuration, read from TOML.

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/property_finder.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `env_logger` filter; `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_dataset_path() -> String {
    "data/listings.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_directory() -> String {
    "exports".to_string()
}

fn default_sheet_name() -> String {
    "Listings".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            sheet_name: default_sheet_name(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn default_file_exists() -> bool {
        Path::new(DEFAULT_CONFIG_PATH).exists()
    }

    /// Loads `config/property_finder.toml`, or defaults when it does not exist.
    ///
    /// Nothing is logged here since this runs before the logger is set up;
    /// callers check `default_file_exists` and report after `init`.
    pub fn load_default() -> AppResult<Self> {
        if !Self::default_file_exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.dataset, DatasetConfig::default());
        assert_eq!(config.export.sheet_name, "Listings");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn default_load_reads_the_shipped_file() {
        assert!(AppConfig::default_file_exists());
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config, AppConfig::load_from_file(DEFAULT_CONFIG_PATH).unwrap());
        assert_eq!(config.export.directory, "exports");
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AppConfig::from_toml_str("[dataset\npath = 1").unwrap_err();
        assert!(matches!(err, crate::errors::AppError::Config(_)));
    }
}
