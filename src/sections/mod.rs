//! Password analysis sections
//!
//! Each section checks a single criterion and yields its recommendation
//! when the password falls short.

mod length;
mod variety;

pub use length::{length_section, MIN_LENGTH};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, SPECIAL_CHARACTERS,
};

/// Result type for section check functions.
/// - `Some(recommendation)` - Criterion not met
/// - `None` - Criterion met
pub type SectionResult = Option<&'static str>;
