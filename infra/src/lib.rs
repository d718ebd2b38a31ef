//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the OxMail
//! application. It provides the concrete outbound mail implementation
//! behind the core crate's `MailServiceTrait` seam.

/// Mail module - SMTP delivery of verification codes
pub mod mail;

pub use mail::{SmtpConfig, SmtpMailService};
