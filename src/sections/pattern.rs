//! Pattern section - repeated characters, same-class runs and sequences.

use super::{limit, Candidate, SectionResult};
use crate::charclass::CharClass;
use crate::config::PolicyConfig;
use crate::error::Violation;

/// Rejects runs of one identical character longer than `maxrepeat`.
pub fn repeat_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    if config.maxrepeat <= 0 {
        return None;
    }

    let run = longest_run(&candidate.chars, |c| c);
    if run > limit(config.maxrepeat) {
        return Some(Violation::RepeatedRun {
            limit: config.maxrepeat,
            run,
        });
    }
    None
}

/// Rejects runs of same-class characters longer than `maxclassrepeat`.
pub fn class_repeat_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    if config.maxclassrepeat <= 0 {
        return None;
    }

    let run = longest_run(&candidate.chars, CharClass::of);
    if run > limit(config.maxclassrepeat) {
        return Some(Violation::ClassRun {
            limit: config.maxclassrepeat,
            run,
        });
    }
    None
}

/// Rejects ascending or descending sequences longer than `maxsequence`.
///
/// A run of exactly `maxsequence` characters is allowed.
pub fn sequence_section(config: &PolicyConfig, candidate: &Candidate<'_>) -> SectionResult {
    if config.maxsequence <= 0 {
        return None;
    }

    let window_size = limit(config.maxsequence) + 1;
    if candidate.chars.len() < window_size {
        return None;
    }

    let found = candidate
        .chars
        .windows(window_size)
        .any(|window| is_monotonic(window, 1) || is_monotonic(window, -1));

    if found {
        return Some(Violation::MonotonicSequence {
            limit: config.maxsequence,
        });
    }
    None
}

/// Length of the longest run of consecutive characters with the same key.
fn longest_run<K: PartialEq>(chars: &[char], key: impl Fn(char) -> K) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<K> = None;

    for &c in chars {
        let k = key(c);
        if prev.as_ref() == Some(&k) {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
        prev = Some(k);
    }
    longest
}

/// True if every step in `window` changes the code point by exactly `step`.
fn is_monotonic(window: &[char], step: i64) -> bool {
    window
        .windows(2)
        .all(|w| i64::from(u32::from(w[1])) - i64::from(u32::from(w[0])) == step)
}
