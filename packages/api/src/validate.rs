//! Validation rules for the registration fields.
//!
//! The patterns here are the single source of truth for both sides of the
//! wire: the form runs [`validate_form`] before submitting and the endpoint
//! runs [`validate_fields`] as the authoritative gate. The two deliberately
//! differ on branch/college — only the client checks list membership, the
//! server accepts those fields as given.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RegisterRequest;
use crate::options::{is_branch, is_college};

/// Return true if `email` looks like `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    RE.is_match(email)
}

/// Return true if `phone` is exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));
    RE.is_match(phone)
}

/// Client-side form check.
///
/// Runs in fixed order and short-circuits on the first failure; the returned
/// message is displayed verbatim. `None` means the form is valid.
pub fn validate_form(form: &RegisterRequest) -> Option<&'static str> {
    if form.username.trim().is_empty() {
        return Some("Username is required.");
    }
    if !is_valid_email(&form.email) {
        return Some("Valid email is required.");
    }
    if !is_valid_phone(&form.phone) {
        return Some("Phone must be a valid 10-digit number.");
    }
    if !is_branch(&form.branch) {
        return Some("Please select a branch.");
    }
    if !is_college(&form.college) {
        return Some("Please select a college.");
    }
    None
}

/// Server-side gate: all five fields present and well formed.
///
/// Branch and college only need to be non-empty here.
pub fn validate_fields(form: &RegisterRequest) -> bool {
    !form.username.is_empty()
        && !form.branch.is_empty()
        && !form.college.is_empty()
        && is_valid_email(&form.email)
        && is_valid_phone(&form.phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            phone: "9876543210".to_string(),
            branch: "Chemical".to_string(),
            college: "Terna Engineering College".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("alice@x.com"));
        assert!(is_valid_email("Foo@Bar.COM"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email(" padded@x.com"));
        assert!(!is_valid_email("spa ce@x.com"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("0000000000"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("987654321a"));
        assert!(!is_valid_phone(" 1234567890 "));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate_form(&valid_form()), None);
        assert!(validate_fields(&valid_form()));
    }

    #[test]
    fn test_first_failure_wins() {
        // Username and email are both bad; the username message comes first.
        let mut form = valid_form();
        form.username = "   ".to_string();
        form.email = "broken".to_string();
        assert_eq!(validate_form(&form), Some("Username is required."));

        form.username = "alice".to_string();
        assert_eq!(validate_form(&form), Some("Valid email is required."));

        form.email = "alice@x.com".to_string();
        form.phone = "12345".to_string();
        assert_eq!(
            validate_form(&form),
            Some("Phone must be a valid 10-digit number.")
        );
    }

    #[test]
    fn test_membership_is_client_only() {
        let mut form = valid_form();
        form.branch = "Astrology".to_string();
        assert_eq!(validate_form(&form), Some("Please select a branch."));
        // The server gate still accepts it.
        assert!(validate_fields(&form));

        form.branch = "Chemical".to_string();
        form.college = "Unknown College".to_string();
        assert_eq!(validate_form(&form), Some("Please select a college."));
        assert!(validate_fields(&form));
    }

    #[test]
    fn test_server_gate_requires_non_empty_fields() {
        let mut form = valid_form();
        form.username = String::new();
        assert!(!validate_fields(&form));

        let mut form = valid_form();
        form.branch = String::new();
        assert!(!validate_fields(&form));

        let mut form = valid_form();
        form.college = String::new();
        assert!(!validate_fields(&form));

        // Whitespace-only usernames slip through, matching the historical
        // behavior of the endpoint (they are trimmed at insert time).
        let mut form = valid_form();
        form.username = " ".to_string();
        assert!(validate_fields(&form));
    }
}
