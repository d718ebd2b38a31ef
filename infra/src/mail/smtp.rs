//! SMTP Mail Service Implementation
//!
//! This module delivers verification code emails through the institutional
//! mail relay. It implements the core `MailServiceTrait` for production
//! delivery.
//!
//! ## Features
//!
//! - Authenticated submission over STARTTLS
//! - Multipart messages (plain text + HTML alternative)
//! - One connection per message, released after the send
//! - Security: email address masking in logs

use std::env;

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, error, info};

use ox_core::services::verification::MailServiceTrait;
use ox_shared::utils::email::mask_email;

/// Mail relay host for outbound submission
pub const SMTP_HOST: &str = "smtp.ox.ac.uk";

/// Mail relay submission port
pub const SMTP_PORT: u16 = 587;

/// Fixed sender identity for every outbound message
pub const SENDER_MAILBOX: &str = "Oxford Verification <deyao.chen@reuben.ox.ac.uk>";

/// Fixed subject line for verification emails
const SUBJECT: &str = "Your Oxford Verification Code";

/// Error raised when relay credentials are not configured
const MISSING_CREDENTIALS: &str = "Missing OX_SMTP_USER or OX_SMTP_PASS.";

/// SMTP mail service configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname
    pub smtp_host: String,
    /// Relay submission port
    pub smtp_port: u16,
    /// Relay account username, if configured
    pub username: Option<String>,
    /// Relay account password, if configured
    pub password: Option<String>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            smtp_host: SMTP_HOST.to_string(),
            smtp_port: SMTP_PORT,
            username: None,
            password: None,
        }
    }
}

impl SmtpConfig {
    /// Create configuration from environment variables
    ///
    /// Credentials are read once here; their *presence* is only checked at
    /// send time, so a process without credentials starts normally and fails
    /// each delivery with a configuration error.
    pub fn from_env() -> Self {
        Self {
            username: non_empty_env("OX_SMTP_USER"),
            password: non_empty_env("OX_SMTP_PASS"),
            ..Default::default()
        }
    }

    /// Both relay credentials, when configured and non-empty
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|u| !u.trim().is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.trim().is_empty())?;
        Some((username, password))
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// SMTP mail service implementation
pub struct SmtpMailService {
    config: SmtpConfig,
}

impl SmtpMailService {
    /// Create a new SMTP mail service
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(SmtpConfig::from_env())
    }
}

/// Plain-text body carrying the verification code
pub(crate) fn verification_text_body(code: &str) -> String {
    format!("Your verification code is: {}", code)
}

/// HTML alternative body; the expiry note is informational only
pub(crate) fn verification_html_body(code: &str) -> String {
    format!(
        "<strong>{}</strong> is your verification code. It expires in 15 minutes.",
        code
    )
}

/// Compose the outbound verification message for a recipient
pub(crate) fn build_verification_message(to: &str, code: &str) -> Result<Message, String> {
    let from: Mailbox = SENDER_MAILBOX
        .parse()
        .map_err(|e| format!("Invalid sender address: {}", e))?;
    let to: Mailbox = to
        .parse()
        .map_err(|e| format!("Invalid recipient address: {}", e))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(SUBJECT)
        .multipart(MultiPart::alternative_plain_html(
            verification_text_body(code),
            verification_html_body(code),
        ))
        .map_err(|e| format!("Failed to build email: {}", e))
}

#[async_trait]
impl MailServiceTrait for SmtpMailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        // Credentials are checked lazily, per request
        let (username, password) = self.config.credentials().ok_or_else(|| {
            error!("Relay credentials are not configured");
            MISSING_CREDENTIALS.to_string()
        })?;

        let message = build_verification_message(email, code)?;

        debug!(
            email = %mask_email(email),
            relay = %self.config.smtp_host,
            "Submitting verification email"
        );

        // Fresh transport per message: EHLO, STARTTLS, EHLO again, AUTH,
        // submit, then drop the connection. Nothing is reused across
        // requests.
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
            .map_err(|e| e.to_string())?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        mailer.send(message).await.map_err(|e| {
            error!(
                email = %mask_email(email),
                error = %e,
                "Relay rejected the message"
            );
            e.to_string()
        })?;

        info!(
            email = %mask_email(email),
            "Verification email accepted by relay"
        );

        Ok(())
    }
}
