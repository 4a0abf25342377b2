//! Persisted reader state
//!
//! Small JSON file next to the config holding what the web edition keeps
//! in local storage: the remembered classroom and the gate authentication.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Stored gate authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuth {
    /// Password digest that was accepted
    pub hash: String,
    /// Unix timestamp (seconds) after which the authentication lapses
    pub expires: i64,
}

/// State remembered between runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersistedState {
    #[serde(default)]
    pub selected_classroom: Option<String>,
    #[serde(default)]
    pub auth: Option<StoredAuth>,
}

impl PersistedState {
    fn state_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("classweek");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("state.json"))
    }

    /// Load state from disk. Missing or unreadable state is not an error,
    /// it just means a fresh start.
    pub fn load() -> Self {
        let path = match Self::state_path() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Could not locate state file: {}", e);
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Discarding corrupt state file: {}", e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("Could not read state file: {}", e);
                Self::default()
            }
        }
    }

    /// Save state to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::state_path()?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
