//! Pattern rule - detects runs of a repeated character.

use super::RuleOutcome;
use crate::report::Feedback;
use secrecy::{ExposeSecret, SecretString};

const MAX_RUN: usize = 2;

/// -1 once if any character repeats three or more times in a row.
///
/// Every char counts, newlines included.
pub fn repetition_rule(password: &SecretString) -> RuleOutcome {
    let mut previous = None;
    let mut run = 0;

    for c in password.expose_secret().chars() {
        if previous == Some(c) {
            run += 1;
            if run > MAX_RUN {
                return RuleOutcome::penalty(1, Feedback::RepeatedCharacters);
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }

    RuleOutcome::NEUTRAL
}
