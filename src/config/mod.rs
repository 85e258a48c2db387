//! Configuration management for teamdir

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::ApiVersion;
use crate::error::{ConfigError, Error, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the team directory service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Directory API revision to target
    #[serde(default)]
    pub api_version: ApiVersion,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".teamdir").join("config.yaml"))
    }

    /// Resolve the config file path, honoring an explicit override
    pub fn resolve_path(override_path: Option<&str>) -> Result<PathBuf> {
        match override_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from the given path (or the default location)
    pub fn load_at(override_path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(override_path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration, treating a missing file as an empty config.
    ///
    /// Commands that can run purely off the environment use this so a
    /// fresh machine does not need `teamdir init` first.
    pub fn load_or_default(override_path: Option<&str>) -> Result<Self> {
        match Self::load_at(override_path) {
            Ok(config) => Ok(config),
            Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
            Err(err) => Err(err),
        }
    }

    /// Save configuration to the given path (or the default location)
    pub fn save_at(&self, override_path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(override_path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Resolve the directory endpoint.
    ///
    /// A flag or environment override wins over the config file; having
    /// neither is a configuration error raised before any request is made.
    pub fn resolve_endpoint(&self, override_endpoint: Option<&str>) -> Result<String> {
        override_endpoint
            .map(str::to_string)
            .or_else(|| self.endpoint.clone())
            .ok_or_else(|| ConfigError::MissingEndpoint.into())
    }
}
