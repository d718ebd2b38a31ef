//! Verification code entity for email-based verification.

use rand::{rngs::OsRng, Rng};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

// Codes cover [100000, 999999]: always six digits, first digit 1-9.
const CODE_RANGE: u32 = 900_000;
const CODE_OFFSET: u32 = 100_000;

/// Verification code issued for a single recipient address.
///
/// The entity is transient: it lives for one request, is embedded in the
/// outbound email and the HTTP response, and is never stored server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    /// Email address this code was issued for
    pub email: String,

    /// The 6-digit verification code
    pub code: String,
}

impl VerificationCode {
    /// Creates a new verification code for the given address with a
    /// cryptographically secure random 6-digit code
    pub fn new(email: String) -> Self {
        Self {
            email,
            code: Self::generate_code(),
        }
    }

    /// Generates a cryptographically secure random 6-digit code
    ///
    /// Samples uniformly from the OS entropy source; `gen_range` performs
    /// rejection sampling, so the result carries no modulo bias.
    fn generate_code() -> String {
        let mut rng = OsRng;
        let code = rng.gen_range(0..CODE_RANGE) + CODE_OFFSET;
        format!("{code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn code_is_six_ascii_digits() {
        let verification = VerificationCode::new("student@ox.ac.uk".to_string());
        assert_eq!(verification.code.len(), CODE_LENGTH);
        assert!(verification.code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn code_never_has_a_leading_zero() {
        for _ in 0..1_000 {
            let code = VerificationCode::new("student@ox.ac.uk".to_string()).code;
            let first = code.chars().next().unwrap();
            assert!(('1'..='9').contains(&first), "unexpected code {code}");
        }
    }

    #[test]
    fn codes_stay_within_declared_range() {
        for _ in 0..1_000 {
            let code: u32 = VerificationCode::new("student@ox.ac.uk".to_string())
                .code
                .parse()
                .unwrap();
            assert!((100_000..=999_999).contains(&code));
        }
    }

    #[test]
    fn codes_are_not_deterministic_per_recipient() {
        let email = "student@ox.ac.uk".to_string();
        let codes: HashSet<String> = (0..50)
            .map(|_| VerificationCode::new(email.clone()).code)
            .collect();
        assert!(codes.len() > 1, "50 generations produced a single code");
    }

    #[test]
    fn codes_spread_across_the_range() {
        // A uniform sampler over 900k values practically cannot confine
        // 10k draws to one half of the range, nor collapse them onto a
        // handful of values.
        let mut codes = HashSet::new();
        let mut below_midpoint = 0u32;
        for _ in 0..10_000 {
            let code: u32 = VerificationCode::new("student@ox.ac.uk".to_string())
                .code
                .parse()
                .unwrap();
            if code < 550_000 {
                below_midpoint += 1;
            }
            codes.insert(code);
        }
        assert!(codes.len() > 9_000);
        assert!(below_midpoint > 3_000);
        assert!(below_midpoint < 7_000);
    }
}
