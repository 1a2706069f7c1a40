//! Password analyzer - runs every section and collects recommendations.

use secrecy::SecretString;

use crate::analysis::{AnalysisResult, Criterion};
use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionResult,
};

/// Analyzes a password against the five criteria.
///
/// Never fails: any string, including the empty one, yields a complete
/// result. Recommendations follow [`Criterion::ALL`] order.
pub fn analyze(password: &SecretString) -> AnalysisResult {
    // Orchestrator: execute sections in sequence
    let sections: [(Criterion, fn(&SecretString) -> SectionResult); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Uppercase, uppercase_section),
        (Criterion::Lowercase, lowercase_section),
        (Criterion::Digit, digit_section),
        (Criterion::Special, special_section),
    ];

    let mut result = AnalysisResult::default();
    for (criterion, section_fn) in sections {
        match section_fn(password) {
            Some(recommendation) => {
                result.set(criterion, false);
                result.recommendations.push(recommendation.to_string());
            }
            None => result.set(criterion, true),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        criteria_met = result.criteria_met(),
        recommendations = result.recommendations.len(),
        "password analyzed"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_str(s: &str) -> AnalysisResult {
        analyze(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_analyze_short_lowercase() {
        let result = analyze_str("abc");
        assert!(!result.length_ok);
        assert!(!result.has_upper);
        assert!(result.has_lower);
        assert!(!result.has_digit);
        assert!(!result.has_special);
        assert_eq!(
            result.recommendations,
            vec![
                "Use at least 12 characters.",
                "Include at least one uppercase letter.",
                "Include at least one number.",
                "Include at least one special character (e.g., !@#$%).",
            ]
        );
    }

    #[test]
    fn test_analyze_all_criteria_met() {
        let result = analyze_str("Password123!");
        assert_eq!(result.criteria_met(), 5);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_analyze_empty_password() {
        let result = analyze_str("");
        assert_eq!(result.criteria_met(), 0);
        let expected: Vec<String> = Criterion::ALL
            .iter()
            .map(|c| c.recommendation().to_string())
            .collect();
        assert_eq!(result.recommendations, expected);
    }

    #[test]
    fn test_analyze_whitespace_only() {
        let result = analyze_str("            ");
        assert!(result.length_ok);
        assert_eq!(result.criteria_met(), 1);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_analyze_lower_and_digits() {
        let result = analyze_str("abcdefgh1234");
        assert!(result.length_ok);
        assert!(!result.has_upper);
        assert!(result.has_lower);
        assert!(result.has_digit);
        assert!(!result.has_special);
        assert_eq!(result.criteria_met(), 3);
    }

    #[test]
    fn test_analyze_length_boundary() {
        assert!(!analyze_str("aaaaaaaaaaa").length_ok);
        assert!(analyze_str("aaaaaaaaaaaa").length_ok);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let pwd = SecretString::new("MyP@ss".to_string().into());
        assert_eq!(analyze(&pwd), analyze(&pwd));
    }

    #[test]
    fn test_recommendations_match_failed_criteria() {
        let samples = ["", "a", "A1", "abc!", "ABCDEFGHIJKL", "Password123!", "pass word 12", "{}|<>"];
        for sample in samples {
            let result = analyze_str(sample);
            assert_eq!(result.recommendations.len(), 5 - result.criteria_met(), "sample {:?}", sample);

            let expected: Vec<String> = Criterion::ALL
                .iter()
                .filter(|&&c| !result.passed(c))
                .map(|c| c.recommendation().to_string())
                .collect();
            assert_eq!(result.recommendations, expected, "sample {:?}", sample);
        }
    }
}
