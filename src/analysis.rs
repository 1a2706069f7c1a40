//! Analysis data model: the five criteria and the per-password result.

/// One of the five independent password checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    /// All criteria, in checklist and recommendation order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Short description shown in the report checklist.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "Length (at least 12 characters)",
            Criterion::Uppercase => "Contains Uppercase Letters",
            Criterion::Lowercase => "Contains Lowercase Letters",
            Criterion::Digit => "Contains Numbers",
            Criterion::Special => "Contains Special Characters",
        }
    }

    /// Advice given when the criterion is not met.
    pub fn recommendation(self) -> &'static str {
        match self {
            Criterion::Length => "Use at least 12 characters.",
            Criterion::Uppercase => "Include at least one uppercase letter.",
            Criterion::Lowercase => "Include at least one lowercase letter.",
            Criterion::Digit => "Include at least one number.",
            Criterion::Special => "Include at least one special character (e.g., !@#$%).",
        }
    }
}

/// Outcome of analyzing a single password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub length_ok: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// One message per failed criterion, in [`Criterion::ALL`] order.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn passed(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length_ok,
            Criterion::Uppercase => self.has_upper,
            Criterion::Lowercase => self.has_lower,
            Criterion::Digit => self.has_digit,
            Criterion::Special => self.has_special,
        }
    }

    pub(crate) fn set(&mut self, criterion: Criterion, value: bool) {
        let flag = match criterion {
            Criterion::Length => &mut self.length_ok,
            Criterion::Uppercase => &mut self.has_upper,
            Criterion::Lowercase => &mut self.has_lower,
            Criterion::Digit => &mut self.has_digit,
            Criterion::Special => &mut self.has_special,
        };
        *flag = value;
    }

    /// Number of criteria met (0-5).
    pub fn criteria_met(&self) -> usize {
        Criterion::ALL.iter().filter(|&&c| self.passed(c)).count()
    }
}
