//! Password validator - runs the policy sections in order.

use secrecy::{ExposeSecret, SecretString};

use crate::config::{PolicyConfig, Principal};
use crate::error::PolicyError;
use crate::sections::{
    class_repeat_section, credit_section, length_section, repeat_section, sequence_section,
    username_section, variety_section, Candidate, SectionFn,
};

/// Sections in evaluation order; the first failure wins.
const SECTIONS: [(&str, SectionFn); 7] = [
    ("credit", credit_section),
    ("length", length_section),
    ("variety", variety_section),
    ("repeat", repeat_section),
    ("class_repeat", class_repeat_section),
    ("sequence", sequence_section),
    ("username", username_section),
];

impl PolicyConfig {
    /// Checks `password` against every active rule.
    ///
    /// Returns `Ok(())` immediately when [`has_any_policy`](Self::has_any_policy)
    /// is false. The `enforcing` and `enforce_for_root` flags are not consulted
    /// here; see [`validate_for`](Self::validate_for).
    ///
    /// # Errors
    ///
    /// [`PolicyError::PasswordTooWeak`] naming the first rule that failed, in
    /// this order: class credits, effective length, class count, repeated
    /// characters, same-class runs, sequences, username.
    pub fn validate(&self, password: &SecretString, username: &str) -> Result<(), PolicyError> {
        if !self.has_any_policy() {
            return Ok(());
        }

        let candidate = Candidate::new(password.expose_secret(), username);

        for (_section_name, section_fn) in SECTIONS {
            if let Some(violation) = section_fn(self, &candidate) {
                #[cfg(feature = "tracing")]
                tracing::debug!("password rejected by {} section: {}", _section_name, violation);
                return Err(PolicyError::PasswordTooWeak(violation));
            }
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate), but honours the enforcement flags.
    ///
    /// Nothing is checked when the policy is not enforcing, or when
    /// `principal` is [`Principal::Root`] and `enforce_for_root` is not 1.
    pub fn validate_for(
        &self,
        password: &SecretString,
        username: &str,
        principal: Principal,
    ) -> Result<(), PolicyError> {
        if !self.applies_to(principal) {
            #[cfg(feature = "tracing")]
            tracing::debug!("policy not enforced for {:?}, skipping validation", principal);
            return Ok(());
        }
        self.validate(password, username)
    }
}
