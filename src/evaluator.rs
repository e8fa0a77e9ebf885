//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::corpus::CommonPasswordSet;
use crate::report::{Feedback, ScoreReport, StrengthCategory};
use crate::rules::{common_password_guard, RULES};

/// Evaluates password strength against a common-password corpus.
///
/// A corpus hit short-circuits to score 0 / `VeryWeak`. Otherwise every rule
/// runs and contributes its delta and feedback in table order. The score is
/// not clamped.
///
/// Total over all inputs: never fails, never performs I/O.
pub fn evaluate_password_strength(password: &SecretString, common: &CommonPasswordSet) -> ScoreReport {
    if common_password_guard(password, common) {
        return ScoreReport {
            score: 0,
            category: StrengthCategory::VeryWeak,
            feedback: vec![Feedback::CommonPassword],
        };
    }

    let (score, feedback) = RULES.iter().fold(
        (0i64, Vec::new()),
        |(score, mut feedback), (_name, rule)| {
            let outcome = rule(password);
            feedback.extend(outcome.feedback);
            (score + outcome.delta, feedback)
        },
    );

    ScoreReport {
        score,
        category: StrengthCategory::from_score(score),
        feedback,
    }
}
