//! Configuration loading for brave-search
//!
//! Configuration is loaded from:
//! 1. Environment variable BRAVE_SEARCH_ENDPOINT (endpoint only)
//! 2. Environment variable BRAVE_SEARCH_CONFIG_PATH
//! 3. ~/.config/brave-search/config.toml
//! 4. Default values
//!
//! The subscription token is never read from the config file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Production web search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// API connection settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// API connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Full URL of the web search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    concat!("brave-search/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::debug!("No config path available, using defaults");
                Self::default()
            }
        };

        // Endpoint from environment (highest priority)
        if let Ok(endpoint) = std::env::var("BRAVE_SEARCH_ENDPOINT") {
            config.api.endpoint = endpoint;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Check the endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.endpoint)
            .with_context(|| format!("invalid endpoint '{}'", self.api.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("endpoint must use http or https, got '{}'", url.scheme());
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("BRAVE_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/brave-search/config.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home)
                .join(".config")
                .join("brave-search")
                .join("config.toml");
            return Some(path);
        }

        None
    }
}
