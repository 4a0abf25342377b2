//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub features: FeatureConfig,
}

impl AppConfig {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("classweek");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk, writing defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "es"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Coordinates and timezone handed to the forecast provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// IANA timezone the school days are anchored to
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_latitude() -> f64 {
    38.9296
}
fn default_longitude() -> f64 {
    -77.0325
}
fn default_timezone() -> String {
    "America/New_York".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

/// Where the newsletter data lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Local directory, or an http(s) base URL the data files are published under
    #[serde(default = "default_data_source")]
    pub source: String,
}

fn default_data_source() -> String {
    "data".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_data_source(),
        }
    }
}

/// Optional features, off by default except the weather outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Require the shared password before showing anything
    #[serde(default)]
    pub password_gate: bool,
    /// SHA-256 hex digest of the shared password
    #[serde(default)]
    pub password_hash: String,
    /// Weather display: "inline" (per schedule row), "section" (own block), "off"
    #[serde(default = "default_weather_display")]
    pub weather_display: String,
}

fn default_weather_display() -> String {
    "inline".to_string()
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            password_gate: false,
            password_hash: String::new(),
            weather_display: default_weather_display(),
        }
    }
}
