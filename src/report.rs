//! Strength report types.

use std::fmt;

/// Ordinal strength classification derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthCategory {
    /// Reachable only through common-password membership.
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    /// Maps an accumulated score to a category.
    ///
    /// `VeryWeak` is never returned here; the scale has no floor, so any
    /// score up to 2 (negative included) is `Weak`.
    pub fn from_score(score: i64) -> Self {
        match score {
            i64::MIN..=2 => Self::Weak,
            3 | 4 => Self::Medium,
            _ => Self::Strong,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Advisory emitted by a scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    CommonPassword,
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
    RepeatedCharacters,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Self::CommonPassword => "commonly used password",
            Self::TooShort => "must be ≥12 characters",
            Self::MissingUppercase => "add at least one uppercase letter",
            Self::MissingLowercase => "add at least one lowercase letter",
            Self::MissingDigit => "add at least one digit",
            Self::MissingSymbol => "add at least one special character",
            Self::RepeatedCharacters => "avoid repeated characters",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a single strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: i64,
    pub category: StrengthCategory,
    /// Advisories in rule-evaluation order, not deduplicated.
    pub feedback: Vec<Feedback>,
}

impl ScoreReport {
    /// Feedback rendered as plain strings.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.feedback.iter().map(Feedback::message)
    }
}
