//! Application configuration.
//!
//! Read from a TOML file (`aqi.toml`) when present, with serde defaults
//! for every field so an absent file means all-defaults. `HOST`, `PORT`,
//! and `AQI_CONFIG` environment variables override at the binary level.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub planner: PlannerSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Paths of the startup-loaded asset files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSettings {
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            metadata_path: default_metadata_path(),
            history_path: default_history_path(),
        }
    }
}

/// Planner defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Start of the fallback window, days ahead of today.
    #[serde(default = "default_window_start")]
    pub window_start_days: i64,
    /// End of the fallback window, days ahead of today.
    #[serde(default = "default_window_end")]
    pub window_end_days: i64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            window_start_days: default_window_start(),
            window_end_days: default_window_end(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/aqi_linear_model.json")
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("models/model_metadata.json")
}

fn default_history_path() -> PathBuf {
    PathBuf::from("data/processed/final_model_features.csv")
}

fn default_window_start() -> i64 {
    30
}

fn default_window_end() -> i64 {
    60
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from the first `aqi.toml` found in standard locations, or
    /// all-defaults when none exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("aqi.toml"),
            PathBuf::from("config/aqi.toml"),
            PathBuf::from("../aqi.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.planner.window_start_days, 30);
        assert_eq!(config.planner.window_end_days, 60);
        assert_eq!(
            config.assets.model_path,
            PathBuf::from("models/aqi_linear_model.json")
        );
    }

    #[test]
    fn test_partial_config_overrides() {
        let toml = r#"
[server]
port = 3000

[assets]
history_path = "fixtures/history.csv"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.assets.history_path,
            PathBuf::from("fixtures/history.csv")
        );
        // Untouched sections keep defaults.
        assert_eq!(config.planner.window_end_days, 60);
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("aqi.toml");
        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 9000\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("aqi.toml");
        std::fs::write(&path, "[server\nport = oops").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }
}
