//! Character variety rules - uppercase, lowercase, digits, symbols.
//!
//! Letter classes are ASCII only; digits are any Unicode decimal digit (Nd).

use super::RuleOutcome;
use crate::report::Feedback;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;

/// Unicode-aware `\d`, i.e. general category Nd.
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// Symbols that count towards the special-character rule.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

fn class_rule(password: &SecretString, class: impl Fn(char) -> bool, missing: Feedback) -> RuleOutcome {
    if password.expose_secret().chars().any(class) {
        RuleOutcome::bonus(1)
    } else {
        RuleOutcome::advise(missing)
    }
}

pub fn uppercase_rule(password: &SecretString) -> RuleOutcome {
    class_rule(password, |c| c.is_ascii_uppercase(), Feedback::MissingUppercase)
}

pub fn lowercase_rule(password: &SecretString) -> RuleOutcome {
    class_rule(password, |c| c.is_ascii_lowercase(), Feedback::MissingLowercase)
}

pub fn digit_rule(password: &SecretString) -> RuleOutcome {
    if DIGIT_RE.is_match(password.expose_secret()) {
        RuleOutcome::bonus(1)
    } else {
        RuleOutcome::advise(Feedback::MissingDigit)
    }
}

pub fn symbol_rule(password: &SecretString) -> RuleOutcome {
    class_rule(password, |c| SYMBOLS.contains(c), Feedback::MissingSymbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        assert_eq!(
            uppercase_rule(&secret("lowercase123!")),
            RuleOutcome::advise(Feedback::MissingUppercase)
        );
    }

    #[test]
    fn test_variety_missing_lowercase() {
        assert_eq!(
            lowercase_rule(&secret("UPPERCASE123!")),
            RuleOutcome::advise(Feedback::MissingLowercase)
        );
    }

    #[test]
    fn test_variety_missing_digit() {
        assert_eq!(digit_rule(&secret("NoNumbers!")), RuleOutcome::advise(Feedback::MissingDigit));
    }

    #[test]
    fn test_variety_missing_symbol() {
        assert_eq!(symbol_rule(&secret("NoSpecial123")), RuleOutcome::advise(Feedback::MissingSymbol));
    }

    #[test]
    fn test_variety_all_classes() {
        let pwd = secret("HasAll123!@#");
        for rule in [uppercase_rule, lowercase_rule, digit_rule, symbol_rule] {
            assert_eq!(rule(&pwd), RuleOutcome::bonus(1));
        }
    }

    #[test]
    fn test_symbol_set_is_fixed() {
        // '-', '_' and '~' are not in the set
        assert_eq!(symbol_rule(&secret("a-b_c~")), RuleOutcome::advise(Feedback::MissingSymbol));
        for c in SYMBOLS.chars() {
            assert_eq!(symbol_rule(&secret(&c.to_string())), RuleOutcome::bonus(1), "symbol {c:?}");
        }
    }

    #[test]
    fn test_non_ascii_decimal_digits_count() {
        // U+0663 ARABIC-INDIC DIGIT THREE, U+096A DEVANAGARI DIGIT FOUR
        assert_eq!(digit_rule(&secret("abc\u{0663}")), RuleOutcome::bonus(1));
        assert_eq!(digit_rule(&secret("\u{096A}")), RuleOutcome::bonus(1));
    }

    #[test]
    fn test_non_decimal_numerics_do_not_count() {
        // Roman numeral and superscript two are numeric but not Nd
        assert_eq!(digit_rule(&secret("\u{2163}\u{00B2}")), RuleOutcome::advise(Feedback::MissingDigit));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let pwd = secret("ÄÖÜäöü");
        assert_eq!(uppercase_rule(&pwd), RuleOutcome::advise(Feedback::MissingUppercase));
        assert_eq!(lowercase_rule(&pwd), RuleOutcome::advise(Feedback::MissingLowercase));
    }
}
