//! Password analysis library
//!
//! Checks a password against five fixed criteria (length, uppercase,
//! lowercase, digit, special character), lists a recommendation for each
//! unmet one and classifies the result as Weak, Moderate or Strong.
//!
//! # Features
//!
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze, evaluate, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password123!".to_string().into());
//! let analysis = analyze(&password);
//!
//! assert!(analysis.recommendations.is_empty());
//! assert_eq!(evaluate(&analysis), PasswordStrength::Strong);
//! ```

// Internal modules
mod analysis;
mod analyzer;
mod error;
mod evaluator;
mod report;
mod sections;

// Public API
pub use analysis::{AnalysisResult, Criterion};
pub use analyzer::analyze;
pub use error::AnalyzerError;
pub use evaluator::{evaluate, PasswordStrength};
pub use report::{run, write_report};
pub use sections::{MIN_LENGTH, SPECIAL_CHARACTERS};
