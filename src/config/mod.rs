// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use apod_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Use a personal API key
//! config.api.api_key = "my-key".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::media::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ApodLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub oembed_endpoint: String,
    pub reference_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            oembed_endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            reference_base_url: DEFAULT_REFERENCE_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub max_attempts: u32,
    pub base_backoff_ms: u64,
    pub request_timeout_secs: u64,
    pub thumbnail_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff_ms: DEFAULT_BASE_BACKOFF_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            thumbnail_timeout_secs: DEFAULT_THUMBNAIL_TIMEOUT_SECS,
        }
    }
}

impl NetworkConfig {
    /// Retry policy for range requests, with attempts clamped to `1..=10`.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.base_backoff_ms),
        )
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    #[must_use]
    pub fn thumbnail_timeout(&self) -> Duration {
        Duration::from_secs(self.thumbnail_timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub preload_cache_size: usize,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            preload_cache_size: DEFAULT_PRELOAD_CACHE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub network: NetworkConfig,
    pub lightbox: LightboxConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, or defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Invalid TOML falls back to defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "ignoring invalid settings file");
        Config::default()
    }))
}

/// Writes a configuration file, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_api_key() {
        let mut config = Config::default();
        config.api.api_key = "personal-key".to_string();
        config.network.max_attempts = 5;
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[network]\nbase_backoff_ms = 100\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.network.base_backoff_ms, 100);
        assert_eq!(loaded.network.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(loaded.api.endpoint, DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(load_from_path(&temp_dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn retry_policy_reflects_network_section() {
        let network = NetworkConfig {
            max_attempts: 50,
            base_backoff_ms: 100,
            ..NetworkConfig::default()
        };
        let policy = network.retry_policy();
        assert_eq!(policy.max_attempts(), MAX_MAX_ATTEMPTS);
        assert_eq!(policy.delay_before(3), Duration::from_millis(200));
    }
}
