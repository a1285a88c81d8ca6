//! Username section - rejects passwords built from the account name.

use secrecy::zeroize::Zeroize;

use super::{Candidate, SectionResult};
use crate::config::PolicyConfig;
use crate::error::Violation;

/// Reversed usernames shorter than this are not checked.
const MIN_REVERSED_LEN: usize = 3;

/// Case-insensitively checks for the username and, when it is at least
/// three characters long, its reverse.
pub fn username_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    if config.usercheck <= 0 || candidate.username.is_empty() {
        return None;
    }

    let mut password = candidate.chars.iter().collect::<String>().to_lowercase();
    let username = candidate.username.to_lowercase();

    let result = if password.contains(&username) {
        Some(Violation::ContainsUsername)
    } else if username.chars().count() >= MIN_REVERSED_LEN {
        let reversed: String = username.chars().rev().collect();
        password
            .contains(&reversed)
            .then_some(Violation::ContainsReversedUsername)
    } else {
        None
    };

    password.zeroize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(usercheck: i32, password: &str, username: &str) -> SectionResult {
        let config = PolicyConfig { usercheck, ..Default::default() };
        username_section(&config, &Candidate::new(password, username))
    }

    #[test]
    fn test_contains_username() {
        assert_eq!(check(1, "user1234", "user"), Some(Violation::ContainsUsername));
        assert_eq!(check(1, "USER1234", "user"), Some(Violation::ContainsUsername));
        assert_eq!(check(1, "x-User-x", "USER"), Some(Violation::ContainsUsername));
    }

    #[test]
    fn test_contains_reversed_username() {
        assert_eq!(
            check(1, "resu1234", "user"),
            Some(Violation::ContainsReversedUsername)
        );
    }

    #[test]
    fn test_short_username_reverse_not_checked() {
        assert_eq!(check(1, "xxbaxx", "ab"), None);
        assert_eq!(check(1, "xxabxx", "ab"), Some(Violation::ContainsUsername));
    }

    #[test]
    fn test_disabled_or_empty_username() {
        assert_eq!(check(0, "user1234", "user"), None);
        assert_eq!(check(1, "anypassword", ""), None);
        assert_eq!(check(1, "Pass1234", "user"), None);
    }
}
