//! Process-wide provider settings
//!
//! Read once when an adapter is constructed. Lookup order:
//! 1. `FLEETFLOW_RESOURCE_CONFIG` (direct path)
//! 2. `./.fleetflow/resources.yaml`
//! 3. `~/.config/fleetflow/resources.yaml`
//!
//! Without a settings file the defaults apply. `FLEETFLOW_RESOURCE_LOG_URI`
//! overrides the log URI from any source.

use crate::error::Result;
use crate::retry::RetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "FLEETFLOW_RESOURCE_CONFIG";
pub const LOG_URI_ENV: &str = "FLEETFLOW_RESOURCE_LOG_URI";
const SETTINGS_FILE: &str = "resources.yaml";

/// Settings shared by every resource adapter in the process
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSettings {
    /// Base URI for backend logs (e.g. `s3://bucket/logs`)
    pub log_uri: Option<String>,

    /// Retry policy for backend calls
    pub retry: RetryConfig,
}

impl ResourceSettings {
    /// Locate and load the settings file, then apply env overrides
    pub fn load() -> Result<Self> {
        let settings = match find_settings_file() {
            Some(path) => Self::from_path(&path)?,
            None => {
                tracing::debug!("No resource settings file found, using defaults");
                Self::default()
            }
        };
        Ok(settings.with_env_overrides())
    }

    /// Parse a YAML settings file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings: ResourceSettings = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded resource settings from {}", path.display());
        Ok(settings)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(log_uri) = std::env::var(LOG_URI_ENV) {
            if !log_uri.is_empty() {
                self.log_uri = Some(log_uri);
            }
        }
        self
    }
}

/// Find the settings file, if any
pub fn find_settings_file() -> Option<PathBuf> {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!(
            "{} points to a missing file: {}",
            CONFIG_PATH_ENV,
            path.display()
        );
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let path = current_dir.join(".fleetflow").join(SETTINGS_FILE);
        if path.exists() {
            return Some(path);
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("fleetflow").join(SETTINGS_FILE))
        .filter(|path| path.exists())
}
