//! Authorization configuration
//!
//! The service authorizes callers with a single shared secret presented as a
//! bearer token. The secret is loaded once at process start; a process with
//! no secret must refuse to serve rather than reject every request.

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Shared-secret authorization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token expected on every request
    pub api_token: String,
}

impl AuthConfig {
    /// Create a new authorization configuration
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }

    /// Load the shared secret from `OX_MAIL_API_TOKEN`.
    ///
    /// Fails when the variable is unset or empty after trimming, so startup
    /// can abort instead of serving a permanently unauthorized endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = env::var("OX_MAIL_API_TOKEN")
            .unwrap_or_default()
            .trim()
            .to_string();

        if api_token.is_empty() {
            return Err(ConfigError::Missing("OX_MAIL_API_TOKEN"));
        }

        Ok(Self { api_token })
    }
}
