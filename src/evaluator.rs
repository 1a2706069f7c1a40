//! Password strength evaluator - maps criteria met to a strength tier.

use std::fmt;

use crate::analysis::AnalysisResult;

/// Three-tier strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Classifies a raw count of met criteria.
    ///
    /// - `5` => `Strong`
    /// - `3..=4` => `Moderate`
    /// - anything else => `Weak`
    pub fn from_criteria_met(criteria_met: usize) -> Self {
        if criteria_met == 5 {
            PasswordStrength::Strong
        } else if criteria_met >= 3 {
            PasswordStrength::Moderate
        } else {
            PasswordStrength::Weak
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(name)
    }
}

/// Evaluates the overall strength of an analyzed password.
pub fn evaluate(result: &AnalysisResult) -> PasswordStrength {
    PasswordStrength::from_criteria_met(result.criteria_met())
}
