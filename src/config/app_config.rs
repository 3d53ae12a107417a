//! Application configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{GameHubError, Result};

/// Default backend address; the hub server binds to loopback only
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend server URL
    pub server_url: String,
    /// UI configuration
    pub ui: UiConfig,
    /// Push channel configuration
    pub push: PushConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start in grid view instead of list view
    pub grid_view: bool,
    /// Log level
    pub log_level: String,
}

/// Push-channel-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Reconnect delay after the push channel drops, in seconds
    pub reconnect_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            ui: UiConfig::default(),
            push: PushConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grid_view: true,
            log_level: "info".to_string(),
        }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            reconnect_seconds: 5,
        }
    }
}

impl AppConfig {
    /// Default config file location: `<config dir>/gamehub/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gamehub")
            .join("config.toml")
    }

    /// Load the configuration from `path`, falling back to defaults when the
    /// file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GameHubError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.server_url)
            .map_err(|e| GameHubError::Config(format!("invalid server_url: {}", e)))?;
        Ok(())
    }
}
