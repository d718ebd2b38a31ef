//! Institutional email utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Root domain every accepted recipient address must belong to
pub const ROOT_DOMAIN: &str = "ox.ac.uk";

// Anchored on a true label boundary: the root domain may only be preceded by
// dot-terminated subdomain labels, never by an arbitrary suffix match
// (rejects e.g. `user@evil-ox.ac.uk`).
static INSTITUTIONAL_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let root = regex::escape(ROOT_DOMAIN);
    Regex::new(&format!(r"(?i)^[^@\s]+@(?:[a-z0-9-]+\.)*{root}$"))
        .expect("institutional email pattern must compile")
});

/// Check if an address belongs to the institutional root domain, either
/// directly or through one or more dot-separated subdomain labels.
/// Matching is case-insensitive.
pub fn is_institutional_email(email: &str) -> bool {
    INSTITUTIONAL_EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logging (e.g. `stu***@some.college.ox.ac.uk`)
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let local = &email[..at_pos];
            let domain = &email[at_pos..];
            let visible: String = local.chars().take(3).collect();
            format!("{}***{}", visible, domain)
        }
        None => String::from("***"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_root_domain_address() {
        assert!(is_institutional_email("student@ox.ac.uk"));
    }

    #[test]
    fn accepts_subdomain_addresses() {
        assert!(is_institutional_email("student@reuben.ox.ac.uk"));
        assert!(is_institutional_email("student@some.college.ox.ac.uk"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_institutional_email("Student@SUB.OX.AC.UK"));
        assert!(is_institutional_email("student@Ox.Ac.Uk"));
    }

    #[test]
    fn rejects_bare_suffix_near_misses() {
        // Shares the root domain as a suffix without a label boundary
        assert!(!is_institutional_email("x@evil-ox.ac.uk"));
        assert!(!is_institutional_email("x@notox.ac.uk"));
    }

    #[test]
    fn rejects_root_domain_embedded_elsewhere() {
        assert!(!is_institutional_email("x@ox.ac.uk.evil.com"));
        assert!(!is_institutional_email("x@example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_institutional_email(""));
        assert!(!is_institutional_email("ox.ac.uk"));
        assert!(!is_institutional_email("@ox.ac.uk"));
        assert!(!is_institutional_email("x@.ox.ac.uk"));
        assert!(!is_institutional_email("a b@ox.ac.uk"));
        assert!(!is_institutional_email("a@b@ox.ac.uk"));
    }

    #[test]
    fn mask_email_hides_most_of_the_local_part() {
        assert_eq!(mask_email("student@ox.ac.uk"), "stu***@ox.ac.uk");
        assert_eq!(mask_email("ab@ox.ac.uk"), "ab***@ox.ac.uk");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
