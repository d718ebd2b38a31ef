//! # OxMail Core
//!
//! Core business logic and domain layer for the OxMail backend.
//! This crate contains the verification code entity, the verification
//! service, the outbound mail seam, and the error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
