//! Length section - checks the effective password length.

use super::credit::credit_for;
use super::{Candidate, SectionResult};
use crate::charclass::CharClass;
use crate::config::PolicyConfig;
use crate::error::Violation;

/// Checks the credit-adjusted length against `minlen`.
///
/// Every character of a class with a positive credit adds that credit on
/// top of its raw length.
pub fn length_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    if config.minlen <= 0 {
        return None;
    }

    let effective = effective_length(config, candidate);
    if effective < i64::from(config.minlen) {
        return Some(Violation::TooShort {
            effective,
            minimum: config.minlen,
        });
    }
    None
}

pub(crate) fn effective_length(config: &PolicyConfig, candidate: &Candidate<'_>) -> i64 {
    let bonus: i64 = CharClass::ALL
        .iter()
        .map(|&class| (class, credit_for(config, class)))
        .filter(|&(_, credit)| credit > 0)
        .map(|(class, credit)| candidate.counts.get(class) as i64 * i64::from(credit))
        .sum();
    candidate.chars.len() as i64 + bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(config: PolicyConfig, password: &str) -> SectionResult {
        length_section(&config, &Candidate::new(password, ""))
    }

    #[test]
    fn test_length_too_short() {
        let config = PolicyConfig { minlen: 8, ..Default::default() };
        assert_eq!(
            check(config, "short"),
            Some(Violation::TooShort { effective: 5, minimum: 8 })
        );
        assert!(check(config, "").is_some());
    }

    #[test]
    fn test_length_exactly_minimum() {
        let config = PolicyConfig { minlen: 8, ..Default::default() };
        assert_eq!(check(config, "12345678"), None);
    }

    #[test]
    fn test_positive_credit_extends_length() {
        let config = PolicyConfig { minlen: 10, dcredit: 2, ..Default::default() };
        assert_eq!(check(config, "Pass123"), None);

        let config = PolicyConfig { minlen: 10, dcredit: 1, ..Default::default() };
        assert_eq!(
            check(config, "Pass12"),
            Some(Violation::TooShort { effective: 8, minimum: 10 })
        );
    }

    #[test]
    fn test_negative_credit_adds_nothing() {
        let config = PolicyConfig { minlen: 8, dcredit: -1, ..Default::default() };
        let candidate = Candidate::new("Pass123", "");
        assert_eq!(effective_length(&config, &candidate), 7);
    }

    #[test]
    fn test_multi_byte_counts_as_one() {
        let config = PolicyConfig { minlen: 4, ..Default::default() };
        assert!(check(config, "äöü").is_some());
        assert_eq!(check(config, "äöüß"), None);
    }
}
