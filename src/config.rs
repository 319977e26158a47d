//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the datastore endpoint and API key, the camp year code used in
//! state-code prefixes, and the last used username.
//!
//! Configuration is stored at `~/.config/campboard/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::form::DEFAULT_YEAR_CODE;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "campboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store_url: Option<String>,
    #[serde(default)]
    pub store_api_key: Option<String>,
    #[serde(default = "default_year_code")]
    pub camp_year_code: String,
    #[serde(default)]
    pub last_username: Option<String>,
}

fn default_year_code() -> String {
    DEFAULT_YEAR_CODE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: None,
            store_api_key: None,
            camp_year_code: default_year_code(),
            last_username: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
