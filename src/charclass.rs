//! Character classes used by every credit and run check.

use std::fmt;

/// One of the four mutually exclusive buckets a password character falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Upper,
    Lower,
    Other,
}

impl CharClass {
    /// Evaluation order for credit checks: digit, upper, lower, other.
    pub const ALL: [CharClass; 4] = [
        CharClass::Digit,
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Other,
    ];

    /// Classifies a character. Anything that is not an ASCII digit or
    /// ASCII letter (including non-ASCII letters) is `Other`.
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            CharClass::Digit
        } else if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_lowercase() {
            CharClass::Lower
        } else {
            CharClass::Other
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Digit => "digit",
            CharClass::Upper => "uppercase letter",
            CharClass::Lower => "lowercase letter",
            CharClass::Other => "special character",
        };
        f.write_str(name)
    }
}

/// Per-class character tallies for one password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub digit: usize,
    pub upper: usize,
    pub lower: usize,
    pub other: usize,
}

impl ClassCounts {
    pub fn tally(chars: &[char]) -> Self {
        let mut counts = ClassCounts::default();
        for &c in chars {
            match CharClass::of(c) {
                CharClass::Digit => counts.digit += 1,
                CharClass::Upper => counts.upper += 1,
                CharClass::Lower => counts.lower += 1,
                CharClass::Other => counts.other += 1,
            }
        }
        counts
    }

    pub fn get(&self, class: CharClass) -> usize {
        match class {
            CharClass::Digit => self.digit,
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Other => self.other,
        }
    }

    /// Number of classes with at least one character.
    pub fn present(&self) -> usize {
        CharClass::ALL
            .iter()
            .filter(|&&class| self.get(class) > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii_buckets() {
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('Q'), CharClass::Upper);
        assert_eq!(CharClass::of('q'), CharClass::Lower);
        assert_eq!(CharClass::of('@'), CharClass::Other);
        assert_eq!(CharClass::of(' '), CharClass::Other);
    }

    #[test]
    fn test_non_ascii_is_other() {
        assert_eq!(CharClass::of('É'), CharClass::Other);
        assert_eq!(CharClass::of('ß'), CharClass::Other);
        assert_eq!(CharClass::of('٣'), CharClass::Other);
    }

    #[test]
    fn test_tally_and_present() {
        let chars: Vec<char> = "Pass1@word".chars().collect();
        let counts = ClassCounts::tally(&chars);
        assert_eq!(
            counts,
            ClassCounts {
                digit: 1,
                upper: 1,
                lower: 7,
                other: 1
            }
        );
        assert_eq!(counts.present(), 4);
        assert_eq!(ClassCounts::tally(&[]).present(), 0);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CharClass::Digit.to_string(), "digit");
        assert_eq!(CharClass::Other.to_string(), "special character");
    }
}
