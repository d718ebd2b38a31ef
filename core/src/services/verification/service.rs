//! Main verification service implementation

use std::sync::Arc;

use ox_shared::utils::email::{is_institutional_email, mask_email, ROOT_DOMAIN};

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{DomainError, DomainResult};

use super::traits::MailServiceTrait;
use super::types::SendCodeResult;

/// Verification service for issuing email verification codes
pub struct VerificationService<M: MailServiceTrait> {
    /// Mail service for delivering codes
    mail_service: Arc<M>,
}

impl<M: MailServiceTrait> VerificationService<M> {
    /// Create a new verification service
    pub fn new(mail_service: Arc<M>) -> Self {
        Self { mail_service }
    }

    /// Issue a verification code for an institutional email address
    ///
    /// This method:
    /// 1. Rejects empty addresses
    /// 2. Validates the address against the institutional root domain
    /// 3. Generates a fresh 6-digit code
    /// 4. Delivers the code by email, waiting for the relay round trip
    ///
    /// The code is returned only when delivery succeeded; a failed send
    /// surfaces the provider's error text and the code is discarded.
    pub async fn send_verification_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let email = email.trim();

        if email.is_empty() {
            return Err(DomainError::EmailRequired);
        }

        if !is_institutional_email(email) {
            tracing::warn!(
                email = %mask_email(email),
                event = "email_rejected",
                "Recipient address is outside the institutional domain"
            );
            return Err(DomainError::EmailOutsideDomain {
                root_domain: ROOT_DOMAIN.to_string(),
            });
        }

        let verification_code = VerificationCode::new(email.to_string());

        tracing::info!(
            email = %mask_email(email),
            event = "code_generated",
            "Generated verification code"
        );

        self.mail_service
            .send_verification_code(email, &verification_code.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "mail_send_failed",
                    "Failed to deliver verification code"
                );
                DomainError::Delivery { message: e }
            })?;

        tracing::info!(
            email = %mask_email(email),
            event = "code_delivered",
            "Verification code delivered"
        );

        Ok(SendCodeResult { verification_code })
    }
}
