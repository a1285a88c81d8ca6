//! Credit section - per-class minimum counts and presence.

use super::{Candidate, SectionResult};
use crate::charclass::CharClass;
use crate::config::PolicyConfig;
use crate::error::Violation;

/// Checks each class credit in digit, upper, lower, other order.
///
/// A negative credit `-k` requires `k` characters of the class. A positive
/// credit only requires the class to be present.
pub fn credit_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    for class in CharClass::ALL {
        let credit = credit_for(config, class);
        let count = candidate.counts.get(class);

        if credit < 0 {
            let required = credit.unsigned_abs() as usize;
            if count < required {
                return Some(Violation::InsufficientClassCount {
                    class,
                    required,
                    actual: count,
                });
            }
        } else if credit > 0 && count == 0 {
            return Some(Violation::MissingClass { class });
        }
    }
    None
}

pub(crate) fn credit_for(config: &PolicyConfig, class: CharClass) -> i32 {
    match class {
        CharClass::Digit => config.dcredit,
        CharClass::Upper => config.ucredit,
        CharClass::Lower => config.lcredit,
        CharClass::Other => config.ocredit,
    }
}
