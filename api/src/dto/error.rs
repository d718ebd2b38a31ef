use serde::{Deserialize, Serialize};

use ox_core::errors::DomainError;

/// JSON error body used by every failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&DomainError> for ErrorBody {
    fn from(error: &DomainError) -> Self {
        Self::new(error.to_string())
    }
}
