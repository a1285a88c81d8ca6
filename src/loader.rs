//! Policy file loading
//!
//! Reads `pwquality.conf` and PAM stack files from disk and hands their
//! text to the parsers. Nothing is cached; every call returns a fresh
//! [`PolicyConfig`].

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::PolicyConfig;
use crate::parser::{parse_config, parse_pam_config};

const CONF_PATH_ENV: &str = "PWQUALITY_CONF_PATH";
const PAM_PATH_ENV: &str = "PWQUALITY_PAM_PATH";

const DEFAULT_CONF_PATH: &str = "/etc/security/pwquality.conf";
const DEFAULT_PAM_PATH: &str = "/etc/pam.d/system-auth";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Policy file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read policy file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Returns the `pwquality.conf` path.
///
/// Priority:
/// 1. Environment variable `PWQUALITY_CONF_PATH`
/// 2. Default path `/etc/security/pwquality.conf`
pub fn get_config_path() -> PathBuf {
    std::env::var(CONF_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONF_PATH))
}

/// Returns the PAM stack file path.
///
/// Priority:
/// 1. Environment variable `PWQUALITY_PAM_PATH`
/// 2. Default path `/etc/pam.d/system-auth`
pub fn get_pam_path() -> PathBuf {
    std::env::var(PAM_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PAM_PATH))
}

/// Loads the effective policy from the configured paths.
///
/// See [`load_policy`].
pub fn load_config() -> Result<PolicyConfig, LoadError> {
    load_policy(get_config_path(), get_pam_path())
}

/// Loads `pwquality.conf`, then applies module arguments from the PAM
/// stack on top of it.
///
/// # Errors
///
/// Returns error if:
/// - The `pwquality.conf` file does not exist
/// - Either file cannot be read
///
/// A missing PAM file is not an error; the freeform policy is returned as is.
pub fn load_policy<P, Q>(conf_path: P, pam_path: Q) -> Result<PolicyConfig, LoadError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let config = load_config_from_path(conf_path)?;

    let pam_path = pam_path.as_ref();
    if !pam_path.exists() {
        #[cfg(feature = "tracing")]
        tracing::debug!("PAM file {:?} not found, using pwquality.conf only", pam_path);
        return Ok(config);
    }

    load_pam_config_from_path(pam_path, Some(config))
}

/// Loads a freeform `pwquality.conf` file.
///
/// # Errors
///
/// Returns error if the file does not exist or cannot be read.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<PolicyConfig, LoadError> {
    let content = read_policy_file(path.as_ref())?;
    let config = parse_config(&content);

    #[cfg(feature = "tracing")]
    tracing::info!("Policy loaded from {:?}", path.as_ref());

    Ok(config)
}

/// Loads a PAM stack file, merging its arguments into `existing`.
///
/// # Errors
///
/// Returns error if the file does not exist or cannot be read.
pub fn load_pam_config_from_path<P: AsRef<Path>>(
    path: P,
    existing: Option<PolicyConfig>,
) -> Result<PolicyConfig, LoadError> {
    let content = read_policy_file(path.as_ref())?;
    let config = parse_pam_config(&content, existing);

    #[cfg(feature = "tracing")]
    tracing::info!("PAM policy loaded from {:?}", path.as_ref());

    Ok(config)
}

fn read_policy_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy load FAILED: FileNotFound {:?}", path);
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    Ok(std::fs::read_to_string(path)?)
}
