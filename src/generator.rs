//! Policy-driven password generation.
//!
//! The entropy source is supplied by the caller as a producer closure that
//! returns a candidate of a requested length. The generator only picks the
//! length and retries until a candidate passes [`PolicyConfig::validate`].

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::PolicyConfig;

/// Number of validated attempts before giving up.
pub const MAX_ATTEMPTS: usize = 26;

/// Length requested when the config has no active rule.
pub const DEFAULT_LENGTH: usize = 12;

/// Starting length when `minlen` is not set.
pub const FALLBACK_MIN_LENGTH: usize = 8;

impl PolicyConfig {
    /// Asks `producer` for passwords until one passes validation.
    ///
    /// The first request is for `max(minlen or 8, sum of negative credits)`
    /// characters, plus `minclass` when `minclass > 1`. Each rejected
    /// candidate grows the requested length by one.
    ///
    /// The result is **not** guaranteed to comply: after [`MAX_ATTEMPTS`]
    /// rejections (or once `token` is cancelled) one more candidate is
    /// produced and returned unchecked. Validate it again if compliance
    /// matters more than availability.
    ///
    /// # Arguments
    /// * `producer` - Returns a raw candidate of the requested length
    /// * `token` - Optional cancellation token (async feature only)
    pub fn generate_password<F>(
        &self,
        mut producer: F,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> SecretString
    where
        F: FnMut(usize) -> SecretString,
    {
        if !self.has_any_policy() {
            return producer(DEFAULT_LENGTH);
        }

        let mut length = self.initial_length();

        for _attempt in 1..=MAX_ATTEMPTS {
            // Check cancellation before each attempt (async only)
            #[cfg(feature = "async")]
            {
                if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("password generation cancelled after {} attempt(s)", _attempt - 1);
                    return producer(length);
                }
            }

            let candidate = producer(length);
            match self.validate(&candidate, "") {
                Ok(()) => return candidate,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("attempt {} at length {} rejected: {}", _attempt, length, _e);
                }
            }
            length += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "no compliant password after {} attempts, returning unchecked candidate of length {}",
            MAX_ATTEMPTS,
            length
        );

        producer(length)
    }

    /// Length of the first candidate requested by [`generate_password`](Self::generate_password).
    pub fn initial_length(&self) -> usize {
        let min_length = if self.minlen > 0 {
            self.minlen as usize
        } else {
            FALLBACK_MIN_LENGTH
        };

        let mut length = min_length.max(self.required_class_chars());
        if self.minclass > 1 {
            length += self.minclass as usize;
        }
        length
    }
}

/// Async version that sends the generated password via channel.
///
/// The retry loop runs on the calling task; wrap a blocking `producer` in
/// `tokio::task::spawn_blocking` instead of awaiting this directly.
#[cfg(feature = "async")]
pub async fn generate_password_tx<F>(
    config: &PolicyConfig,
    producer: F,
    token: CancellationToken,
    tx: mpsc::Sender<SecretString>,
) where
    F: FnMut(usize) -> SecretString,
{
    #[cfg(feature = "tracing")]
    tracing::info!("password generation is about to start...");

    let password = config.generate_password(producer, Some(token));

    if let Err(_e) = tx.send(password).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    /// Runs generation without a cancellation token under either feature set.
    fn generate<F>(config: &PolicyConfig, producer: F) -> SecretString
    where
        F: FnMut(usize) -> SecretString,
    {
        #[cfg(feature = "async")]
        let password = config.generate_password(producer, None);

        #[cfg(not(feature = "async"))]
        let password = config.generate_password(producer);

        password
    }

    #[test]
    fn test_no_policy_requests_default_length() {
        let mut requested = Vec::new();
        let password = generate(&PolicyConfig::default(), |len| {
            requested.push(len);
            secret("defaultpassword")
        });
        assert_eq!(password.expose_secret(), "defaultpassword");
        assert_eq!(requested, vec![DEFAULT_LENGTH]);
    }

    #[test]
    fn test_retries_until_valid() {
        let config = PolicyConfig { minlen: 8, dcredit: -1, ..Default::default() };
        let password = generate(&config, |len| {
            if len == 8 {
                secret("nodigits")
            } else {
                secret("pass1word")
            }
        });
        assert_eq!(password.expose_secret(), "pass1word");
        assert_eq!(config.validate(&password, ""), Ok(()));
    }

    #[test]
    fn test_complex_requirements_multiple_retries() {
        let config = PolicyConfig {
            minlen: 12,
            dcredit: -1,
            ucredit: -1,
            lcredit: -1,
            ocredit: -1,
            minclass: 3,
            ..Default::default()
        };
        let mut requested = Vec::new();
        let password = generate(&config, |len| {
            requested.push(len);
            match requested.len() {
                1 => secret("short"),
                2 => secret("nouppercase1@"),
                3 => secret("NOLOWERCASE1@A"),
                _ => secret("ValidPass12@"),
            }
        });
        assert_eq!(config.validate(&password, ""), Ok(()));
        assert_eq!(requested, vec![15, 16, 17, 18]);
    }

    #[test]
    fn test_attempt_counting() {
        let config = PolicyConfig {
            minlen: 10,
            dcredit: -2,
            ucredit: -1,
            lcredit: -1,
            ocredit: -1,
            ..Default::default()
        };
        let mut attempts = 0;
        let password = generate(&config, |_| {
            attempts += 1;
            match attempts {
                1 => secret("short"),
                2 => secret("nouppercase12@"),
                3 => secret("NOLOWERCASE12@"),
                4 => secret("NoSpecial12"),
                _ => secret("ValidPass12@"),
            }
        });
        assert_eq!(password.expose_secret(), "ValidPass12@");
        assert_eq!(attempts, 5);
    }

    #[test]
    fn test_initial_length() {
        let config = PolicyConfig { minlen: 8, ..Default::default() };
        assert_eq!(config.initial_length(), 8);

        let config = PolicyConfig { minlen: 8, dcredit: -2, ucredit: -1, ..Default::default() };
        assert_eq!(config.initial_length(), 8);

        let config = PolicyConfig { minlen: 5, dcredit: -3, ucredit: -4, ..Default::default() };
        assert_eq!(config.initial_length(), 7);

        let config = PolicyConfig { dcredit: -2, ..Default::default() };
        assert_eq!(config.initial_length(), FALLBACK_MIN_LENGTH);

        let config = PolicyConfig { minlen: 8, minclass: 1, dcredit: -1, ..Default::default() };
        assert_eq!(config.initial_length(), 8);

        let config = PolicyConfig { minlen: 8, minclass: 3, dcredit: -1, ..Default::default() };
        assert_eq!(config.initial_length(), 11);
    }

    #[test]
    fn test_budget_exhausted_returns_unchecked_candidate() {
        let config = PolicyConfig { minlen: 8, maxrepeat: 1, ..Default::default() };
        let mut calls = 0;
        let password = generate(&config, |len| {
            calls += 1;
            secret(&"a".repeat(len))
        });
        assert_eq!(calls, MAX_ATTEMPTS + 1);
        assert_eq!(password.expose_secret().len(), 8 + MAX_ATTEMPTS);
        assert!(config.validate(&password, "").is_err());
    }

    #[test]
    fn test_generated_password_ignores_username() {
        let config = PolicyConfig { minlen: 4, usercheck: 1, ..Default::default() };
        let password = generate(&config, |_| secret("root1234"));
        assert_eq!(password.expose_secret(), "root1234");
    }
}
