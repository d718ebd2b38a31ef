//! Domain-specific error types and error handling.
//!
//! The `#[error]` strings double as the wire-level error messages, so they
//! must stay exactly as the HTTP contract spells them.

use thiserror::Error;

/// Core domain errors covering every request-boundary outcome
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("email is required")]
    EmailRequired,

    #[error("email must end with @{root_domain}")]
    EmailOutsideDomain { root_domain: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("{message}")]
    Delivery { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
