//! Length rules - measured in chars, not bytes.

use super::RuleOutcome;
use crate::report::Feedback;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

fn char_len(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// +1 from 8 characters. Never advises on its own.
pub fn min_length_rule(password: &SecretString) -> RuleOutcome {
    if char_len(password) >= MIN_LENGTH {
        RuleOutcome::bonus(1)
    } else {
        RuleOutcome::NEUTRAL
    }
}

/// +1 from 12 characters, otherwise advises a longer password.
pub fn recommended_length_rule(password: &SecretString) -> RuleOutcome {
    if char_len(password) >= RECOMMENDED_LENGTH {
        RuleOutcome::bonus(1)
    } else {
        RuleOutcome::advise(Feedback::TooShort)
    }
}
