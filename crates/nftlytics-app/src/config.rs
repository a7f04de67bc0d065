//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fullnode REST endpoint base URL.
    #[serde(default = "default_node_url")]
    pub node_url: String,
    /// Marketplace address to query. The CLI flag takes precedence.
    #[serde(default)]
    pub marketplace_address: Option<String>,
    /// Watch-mode refresh interval in seconds. 0 fetches once and exits.
    #[serde(default)]
    pub watch_interval_secs: u64,
}

fn default_node_url() -> String {
    "https://fullnode.testnet.aptoslabs.com/v1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            marketplace_address: None,
            watch_interval_secs: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the given path, falling back to defaults
    /// when no file exists there.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
