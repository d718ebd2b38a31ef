//! Traits for outbound mail integration

use async_trait::async_trait;

/// Trait for outbound mail service integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Compose and deliver a verification code email to the given address.
    ///
    /// Returns after the relay has accepted the message; the error string is
    /// surfaced verbatim to the caller of the HTTP endpoint.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String>;
}
