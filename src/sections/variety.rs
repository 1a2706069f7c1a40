//! Character variety sections - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::analysis::Criterion;

/// Characters accepted by the special-character check. Nothing else counts.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

fn contains_any(password: &SecretString, predicate: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(predicate)
}

/// Checks for at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| c.is_ascii_uppercase()) {
        return Some(Criterion::Uppercase.recommendation());
    }
    None
}

/// Checks for at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| c.is_ascii_lowercase()) {
        return Some(Criterion::Lowercase.recommendation());
    }
    None
}

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| c.is_ascii_digit()) {
        return Some(Criterion::Digit.recommendation());
    }
    None
}

/// Checks for at least one character from [`SPECIAL_CHARACTERS`].
pub fn special_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| SPECIAL_CHARACTERS.contains(c)) {
        return Some(Criterion::Special.recommendation());
    }
    None
}
