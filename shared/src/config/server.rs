//! Server configuration module

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load the bind address from `OX_MAIL_HOST` / `OX_MAIL_PORT`,
    /// falling back to `0.0.0.0:8080` when either is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("OX_MAIL_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));
        let port = match env::var("OX_MAIL_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("OX_MAIL_PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self { host, port })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
