//! HTTP route handlers
//!
//! The service exposes a single operation: issuing a verification code to an
//! institutional email address.

pub mod send_code;

pub use send_code::AppState;
