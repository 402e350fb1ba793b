//! Server configuration.
//!
//! Loaded from `~/.config/weekplan/config.toml` (or the path in the
//! `WEEKPLAN_CONFIG` environment variable). Every field has a default, so
//! a missing file yields a fully usable development setup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weekplan/events.json")
}

fn default_jwt_secret() -> String {
    "your-secret-key-change-in-production".to_string()
}

fn default_token_ttl_hours() -> i64 {
    24
}

fn default_demo_username() -> String {
    "demo".to_string()
}

fn default_demo_password() -> String {
    "demo123".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Where the event document file lives
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,

    /// Single-user demo credentials checked by /auth/login
    #[serde(default = "default_demo_username")]
    pub demo_username: String,

    #[serde(default = "default_demo_password")]
    pub demo_password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
            data_file: default_data_file(),
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl_hours(),
            demo_username: default_demo_username(),
            demo_password: default_demo_password(),
        }
    }
}

impl ServerConfig {
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("WEEKPLAN_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weekplan/config.toml")
    }

    /// Load from `path` (or the default location). A missing file is not
    /// an error; a malformed one is.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(Self::config_path);
        if !path.exists() {
            return Ok(ServerConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read config at {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Could not parse config at {}", path.display()))
    }
}
