// File: src/config.rs
// Purpose: Configuration parsing from employee-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "employee-form.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dialog: DialogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Summary dialog titles
///
/// Field labels and error messages are fixed; only the titles vary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogConfig {
    #[serde(default = "default_accepted_title")]
    pub accepted_title: String,

    #[serde(default = "default_rejected_title")]
    pub rejected_title: String,
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_accepted_title() -> String {
    "Submitted".to_string()
}

fn default_rejected_title() -> String {
    "Oops!".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            accepted_title: default_accepted_title(),
            rejected_title: default_rejected_title(),
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for binding a listener
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a TOML file
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

    /// Load configuration from default path (./employee-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
