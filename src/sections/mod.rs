//! Password validation sections
//!
//! Each section checks one family of rules against a prepared
//! [`Candidate`] and reports the first rule it finds broken.

mod credit;
mod length;
mod pattern;
mod username;
mod variety;

pub use credit::credit_section;
pub use length::length_section;
pub use pattern::{class_repeat_section, repeat_section, sequence_section};
pub use username::username_section;
pub use variety::variety_section;

use secrecy::zeroize::Zeroize;

use crate::charclass::ClassCounts;
use crate::config::PolicyConfig;
use crate::error::Violation;

/// Result type for section functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Violation>;

/// Signature shared by every section.
pub type SectionFn = fn(&PolicyConfig, &Candidate<'_>) -> SectionResult;

/// A password exposed for the duration of one validation call.
///
/// The character buffer is wiped on drop.
pub struct Candidate<'a> {
    pub chars: Vec<char>,
    pub counts: ClassCounts,
    pub username: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(password: &str, username: &'a str) -> Self {
        let chars: Vec<char> = password.chars().collect();
        let counts = ClassCounts::tally(&chars);
        Self {
            chars,
            counts,
            username,
        }
    }
}

impl Drop for Candidate<'_> {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

/// Converts a positive limit from the config into a run length.
pub(crate) fn limit(value: i32) -> usize {
    value.max(0) as usize
}
