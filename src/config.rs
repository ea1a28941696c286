//! Configuration loading and management
//!
//! Handles parsing of `taskboard.toml`. Every field has a default, so a
//! missing file (or a missing section) is fine.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:3000"
//!
//! [storage]
//! data_dir = "data"
//! lock_timeout_ms = 5000
//!
//! [categories]
//! default_color = "#6c757d"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::category::DEFAULT_COLOR;
use crate::error::{Error, Result};
use crate::lock::DEFAULT_LOCK_TIMEOUT_MS;
use crate::storage::Storage;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "taskboard.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub categories: CategoriesConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Collection document storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `tasks.json` and `categories.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// How long a request waits for a collection lock
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_lock_timeout_ms() -> u64 {
    DEFAULT_LOCK_TIMEOUT_MS
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            lock_timeout_ms: default_lock_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesConfig {
    /// Color given to categories created without one
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
        }
    }
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists; fall back to defaults when it is missing or
    /// invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.trim().parse().map_err(|err| {
            Error::InvalidConfig(format!(
                "server.bind: invalid address '{}': {err}",
                self.server.bind
            ))
        })
    }

    /// Storage accessor for the configured data directory
    pub fn storage(&self) -> Storage {
        Storage::new(self.storage.data_dir.clone()).with_lock_timeout(self.storage.lock_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "storage.data_dir cannot be empty".to_string(),
            ));
        }
        if self.storage.lock_timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "storage.lock_timeout_ms must be > 0".to_string(),
            ));
        }
        if self.categories.default_color.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "categories.default_color cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
