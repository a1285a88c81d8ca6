//! Password quality policy engine
//!
//! This library models pwquality / cracklib password rules, parses them
//! from `pwquality.conf` text or PAM `password` directives, validates
//! passwords against them, and drives a caller-supplied generator until it
//! produces a compliant password.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable generation and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWQUALITY_CONF_PATH`: Custom path to `pwquality.conf`
//!   (default: `/etc/security/pwquality.conf`)
//! - `PWQUALITY_PAM_PATH`: Custom path to the PAM stack file
//!   (default: `/etc/pam.d/system-auth`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::parse_config;
//! use secrecy::SecretString;
//!
//! let policy = parse_config("minlen = 8\ndcredit = -1\nucredit = -1\nminclass = 3");
//!
//! let password = SecretString::new("MyP@ssw0rd".to_string().into());
//! assert!(policy.validate(&password, "alice").is_ok());
//!
//! let weak = SecretString::new("password".to_string().into());
//! let err = policy.validate(&weak, "alice").unwrap_err();
//! println!("Rejected: {}", err);
//! ```

// Internal modules
mod charclass;
mod config;
mod error;
mod generator;
mod loader;
mod parser;
mod sections;
mod validator;

// Public API
pub use charclass::{CharClass, ClassCounts};
pub use config::{PolicyConfig, Principal};
pub use error::{PolicyError, Violation};
pub use generator::{DEFAULT_LENGTH, FALLBACK_MIN_LENGTH, MAX_ATTEMPTS};
pub use loader::{
    get_config_path, get_pam_path, load_config, load_config_from_path, load_pam_config_from_path,
    load_policy, LoadError,
};
pub use parser::{
    parse_config, parse_config_with_warnings, parse_pam_config, parse_pam_config_with_warnings,
    ParseOutcome, ParseWarning,
};

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
