//! Shared error types

use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set or empty")]
    Missing(&'static str),

    #[error("{0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_variable() {
        let err = ConfigError::Missing("OX_MAIL_API_TOKEN");
        assert_eq!(err.to_string(), "OX_MAIL_API_TOKEN is not set or empty");

        let err = ConfigError::Invalid("OX_MAIL_PORT", "eighty".to_string());
        assert_eq!(err.to_string(), "OX_MAIL_PORT has an invalid value: eighty");
    }
}
