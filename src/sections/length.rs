//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::analysis::Criterion;

pub const MIN_LENGTH: usize = 12;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(recommendation)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Criterion::Length.recommendation());
    }
    None
}
