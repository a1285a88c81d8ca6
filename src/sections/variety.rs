//! Character variety section - checks the number of distinct classes.

use super::{Candidate, SectionResult};
use crate::config::PolicyConfig;
use crate::error::Violation;

/// Checks that at least `minclass` of the four classes are present.
pub fn variety_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    if config.minclass <= 0 {
        return None;
    }

    let present = candidate.counts.present();
    if (present as i64) < i64::from(config.minclass) {
        return Some(Violation::TooFewClasses {
            required: config.minclass,
            actual: present,
        });
    }
    None
}
