//! Error types returned by validation.

use thiserror::Error;

use crate::charclass::CharClass;

/// The only failure `validate` reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("password is too weak: {0}")]
    PasswordTooWeak(Violation),
}

impl PolicyError {
    /// The rule that rejected the password.
    pub fn violation(&self) -> &Violation {
        match self {
            PolicyError::PasswordTooWeak(v) => v,
        }
    }
}

impl From<Violation> for PolicyError {
    fn from(v: Violation) -> Self {
        PolicyError::PasswordTooWeak(v)
    }
}

/// Which rule failed, with the numbers that made it fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("password requires at least {required} {class}(s), found {actual}")]
    InsufficientClassCount {
        class: CharClass,
        required: usize,
        actual: usize,
    },
    #[error("password should contain at least one {class}")]
    MissingClass { class: CharClass },
    #[error("password effective length {effective} is less than the minimum of {minimum}")]
    TooShort { effective: i64, minimum: i32 },
    #[error("password requires at least {required} character class(es), found {actual}")]
    TooFewClasses { required: i32, actual: usize },
    #[error("password contains more than {limit} consecutive repeated characters")]
    RepeatedRun { limit: i32, run: usize },
    #[error("password contains more than {limit} consecutive characters of the same class")]
    ClassRun { limit: i32, run: usize },
    #[error("password contains a sequence of more than {limit} consecutive characters")]
    MonotonicSequence { limit: i32 },
    #[error("password contains the username")]
    ContainsUsername,
    #[error("password contains the reversed username")]
    ContainsReversedUsername,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_rule() {
        let err = PolicyError::from(Violation::InsufficientClassCount {
            class: CharClass::Digit,
            required: 2,
            actual: 1,
        });
        assert_eq!(
            err.to_string(),
            "password is too weak: password requires at least 2 digit(s), found 1"
        );

        let err = PolicyError::from(Violation::MissingClass {
            class: CharClass::Upper,
        });
        assert!(err
            .to_string()
            .contains("password should contain at least one uppercase letter"));
    }

    #[test]
    fn test_violation_accessor() {
        let err = PolicyError::PasswordTooWeak(Violation::ContainsUsername);
        assert_eq!(err.violation(), &Violation::ContainsUsername);
    }
}
