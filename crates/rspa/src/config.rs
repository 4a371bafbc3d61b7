// File: src/config.rs
// Purpose: Configuration parsing from rspa.toml

use anyhow::{Context, Result};
use rspa_router::RouterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the app starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Origin links are resolved against (default: "http://localhost")
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path the session starts at (default: "/")
    #[serde(default = "default_entry_path")]
    pub entry_path: String,

    /// HTML page whose body hosts the app; a bare `<div id="app">` when unset
    #[serde(default)]
    pub index_html: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set (default: "info")
    #[serde(default = "default_level")]
    pub level: String,
}

// Default values
fn default_name() -> String {
    "rspa-app".to_string()
}

fn default_origin() -> String {
    rspa_dom::DEFAULT_ORIGIN.to_string()
}

fn default_entry_path() -> String {
    "/".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

// Default implementations
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            origin: default_origin(),
            entry_path: default_entry_path(),
            index_html: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from rspa.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rspa.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rspa.toml")
    }
}
