//! Mail Service Module
//!
//! This module provides the outbound mail implementation used to deliver
//! verification codes over authenticated STARTTLS SMTP.

pub mod smtp;

// Re-export commonly used types
pub use smtp::{SmtpConfig, SmtpMailService};

#[cfg(test)]
mod tests;
