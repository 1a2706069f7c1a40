//! Interactive runner and console report.

use std::io::{BufRead, Write};

use secrecy::SecretString;

use crate::analysis::{AnalysisResult, Criterion};
use crate::analyzer::analyze;
use crate::error::AnalyzerError;
use crate::evaluator::{evaluate, PasswordStrength};

const PROMPT: &str = "Enter the password you want to analyze: ";

fn glyph(passed: bool) -> &'static str {
    if passed { "✔" } else { "✘" }
}

/// Writes the analysis checklist, recommendations and strength label.
pub fn write_report<W: Write>(
    output: &mut W,
    analysis: &AnalysisResult,
    strength: PasswordStrength,
) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Password Analysis Results:")?;
    for (i, criterion) in Criterion::ALL.iter().enumerate() {
        writeln!(
            output,
            "{}. {}: {}",
            i + 1,
            criterion.label(),
            glyph(analysis.passed(*criterion))
        )?;
    }

    if !analysis.recommendations.is_empty() {
        writeln!(output)?;
        writeln!(output, "Recommendations to Improve Password Strength:")?;
        for (i, recommendation) in analysis.recommendations.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, recommendation)?;
        }
    }

    writeln!(output)?;
    writeln!(output, "Overall Password Strength: {}", strength)?;
    Ok(())
}

/// Reads exactly one line from `input`, dropping the line terminator only.
fn read_password<R: BufRead>(input: &mut R) -> Result<SecretString, AnalyzerError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        #[cfg(feature = "tracing")]
        tracing::error!("password input FAILED: stream closed before a line was read");
        return Err(AnalyzerError::InputClosed);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(SecretString::new(line.into()))
}

/// Runs one full analysis pass: banner, prompt, one line of input, report.
///
/// # Errors
///
/// Returns error if:
/// - `input` is closed before a line arrives
/// - reading or writing fails
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PasswordStrength, AnalyzerError> {
    writeln!(output, "Welcome to the Password Analyzer!")?;
    writeln!(
        output,
        "This tool will evaluate the strength of your password and provide recommendations for improvement."
    )?;
    writeln!(output)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let password = read_password(input)?;

    #[cfg(feature = "tracing")]
    tracing::debug!("password read, analyzing");

    let analysis = analyze(&password);
    let strength = evaluate(&analysis);
    write_report(output, &analysis, strength)?;
    output.flush()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%strength, "report written");

    Ok(strength)
}
