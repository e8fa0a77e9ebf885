//! Scoring rules
//!
//! Each rule inspects one aspect of the password and contributes a signed
//! score delta plus an optional advisory. Rules are independent: none reads
//! another's outcome.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_password_guard;
pub use length::{min_length_rule, recommended_length_rule};
pub use pattern::repetition_rule;
pub use variety::{digit_rule, lowercase_rule, symbol_rule, uppercase_rule};

use crate::report::Feedback;
use secrecy::SecretString;

/// Contribution of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub delta: i64,
    pub feedback: Option<Feedback>,
}

impl RuleOutcome {
    pub const NEUTRAL: Self = Self { delta: 0, feedback: None };

    pub fn bonus(delta: i64) -> Self {
        Self { delta, feedback: None }
    }

    pub fn advise(feedback: Feedback) -> Self {
        Self { delta: 0, feedback: Some(feedback) }
    }

    pub fn penalty(delta: i64, feedback: Feedback) -> Self {
        Self { delta: -delta, feedback: Some(feedback) }
    }
}

pub type Rule = fn(&SecretString) -> RuleOutcome;

/// Accumulating rules, in evaluation order.
pub const RULES: &[(&str, Rule)] = &[
    ("min_length", min_length_rule),
    ("recommended_length", recommended_length_rule),
    ("uppercase", uppercase_rule),
    ("lowercase", lowercase_rule),
    ("digit", digit_rule),
    ("symbol", symbol_rule),
    ("repetition", repetition_rule),
];
