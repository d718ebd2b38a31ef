//! Types for verification service results

use crate::domain::entities::verification_code::VerificationCode;

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The verification code that was generated and delivered
    pub verification_code: VerificationCode,
}
