//! Config file handling

use std::path::{Path, PathBuf};

use crate::errors::RestedError;

/// rested-export configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,

    /// CLI options inserted after the program name on every run
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, RestedError> {
        Self::load_from(Self::default_config_dir())
    }

    /// Load configuration from config.toml in the given directory
    pub fn load_from(config_dir: PathBuf) -> Result<Self, RestedError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir,
                default_options: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| RestedError::Config(format!("Failed to read config: {}", e)))?;

        let default_options = Self::parse_default_options(&content)?;

        Ok(Self {
            config_dir,
            default_options,
        })
    }

    /// Extract [defaults] options from TOML config content
    fn parse_default_options(content: &str) -> Result<Vec<String>, RestedError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| RestedError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(default_options)
    }

    /// Config directory: RESTED_EXPORT_CONFIG_DIR override, else the
    /// platform config dir
    fn default_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("RESTED_EXPORT_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .map(|d| d.join("rested-export"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Path of the config file inside a config directory
    pub fn config_file(config_dir: &Path) -> PathBuf {
        config_dir.join("config.toml")
    }
}
