//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Shared-secret authorization configuration
//! - `server` - HTTP server bind configuration
//!
//! All configuration is read once from the environment at process start and
//! handed to the request path as immutable values.

pub mod auth;
pub mod server;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use server::ServerConfig;
