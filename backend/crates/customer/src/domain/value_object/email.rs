//! Email Format
//!
//! Format validation only - deliverability is never checked.

use regex::Regex;
use std::sync::LazyLock;

/// `local@label.label.tld`
///
/// Local part: letters, digits and `_ ' + - .`, ending in a letter, digit,
/// `_`, `+` or `-`. Domain: labels starting with a letter or digit, then an
/// alphabetic TLD of two or more letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Basic email format validation
///
/// Besides the pattern, the address must not start with a dot and must not
/// contain two consecutive dots anywhere.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("User@Example.COM"));
        assert!(is_valid_email("user.name@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("o'brien@mail.example.bg"));
        assert!(is_valid_email("a-b_c@sub-domain.example.org"));
    }

    #[test]
    fn test_email_invalid() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_email_dot_placement() {
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("user.@example.com"));
        assert!(!is_valid_email("us..er@example.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@.example.com"));
    }

    #[test]
    fn test_email_domain_labels() {
        assert!(!is_valid_email("user@-example.com"));
        assert!(is_valid_email("user@example-.com"));
    }
}
