//! Configuration loading and management.

use banter_proto::ChatUser;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server to connect to.
    pub server: ServerConfig,
    /// Local user identity.
    pub user: UserConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Chat server endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host name or address (e.g., "chat.example.net").
    pub host: String,
    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Local user configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    /// Display name used on the wire.
    pub name: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive (overridden by the BANTER_LOG env var).
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_port() -> u16 {
    7000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check that the configured values can actually be used.
    ///
    /// The user name must satisfy the wire format's name rules; the host
    /// must be non-empty. Ports are already range-checked by the type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Invalid("server.host is empty".to_string()));
        }
        ChatUser::new(self.user.name.as_str())
            .map_err(|e| ConfigError::Invalid(format!("user.name: {e}")))?;
        Ok(())
    }
}
