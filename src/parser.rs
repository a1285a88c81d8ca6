//! Parsers for `pwquality.conf` text and PAM `password` directives.
//!
//! Both dialects are permissive: malformed lines, unknown keys and
//! non-numeric values are skipped and the affected field keeps its
//! previous value. The `*_with_warnings` variants report what was skipped.

use thiserror::Error;

use crate::config::PolicyConfig;

/// A line or token that the parser skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("line {line}: invalid value {value:?} for {key}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
    #[error("line {line}: unknown key {key}")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: unknown flag {token}")]
    UnknownFlag { line: usize, token: String },
}

/// A parsed policy together with everything the parser ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub config: PolicyConfig,
    pub warnings: Vec<ParseWarning>,
}

/// PAM module arguments accepted but with no policy meaning here.
const IGNORED_PAM_KEYS: [&str; 2] = ["retry", "difok"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    Freeform,
    Pam,
}

impl Dialect {
    fn ignores(self, key: &str) -> bool {
        self == Dialect::Pam && IGNORED_PAM_KEYS.contains(&key)
    }

    /// In the PAM dialect the directive itself (`password`, the control
    /// field, the module path) shows up as bare tokens; those are not
    /// worth a warning.
    fn is_directive_token(self, token: &str) -> bool {
        self == Dialect::Pam
            && (token == "password"
                || token.contains("pam_")
                || matches!(
                    token,
                    "required" | "requisite" | "sufficient" | "optional" | "include" | "substack"
                ))
    }
}

/// Parses freeform `key = value` text (the `pwquality.conf` format).
pub fn parse_config(text: &str) -> PolicyConfig {
    parse_config_with_warnings(text).config
}

/// Like [`parse_config`], also returning the skipped lines.
pub fn parse_config_with_warnings(text: &str) -> ParseOutcome {
    let mut config = PolicyConfig::default();
    let mut warnings = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        apply_setting(&mut config, line, idx + 1, Dialect::Freeform, &mut warnings);
    }

    ParseOutcome { config, warnings }
}

/// Parses module arguments from PAM `password` lines that load
/// `pam_pwquality` or `pam_cracklib`, merging into `existing` if given.
///
/// Every matching line is applied in order, so a later directive
/// overrides an earlier one for the same key.
pub fn parse_pam_config(text: &str, existing: Option<PolicyConfig>) -> PolicyConfig {
    parse_pam_config_with_warnings(text, existing).config
}

/// Like [`parse_pam_config`], also returning the skipped tokens.
pub fn parse_pam_config_with_warnings(text: &str, existing: Option<PolicyConfig>) -> ParseOutcome {
    let mut config = existing.unwrap_or_default();
    let mut warnings = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with('#') || !is_quality_directive(line) {
            continue;
        }
        for token in line.split_whitespace() {
            apply_setting(&mut config, token, idx + 1, Dialect::Pam, &mut warnings);
        }
    }

    ParseOutcome { config, warnings }
}

fn is_quality_directive(line: &str) -> bool {
    line.contains("password")
        && (line.contains("pam_pwquality") || line.contains("pam_cracklib"))
}

/// Applies one `key=value` setting or bare flag to `config`.
fn apply_setting(
    config: &mut PolicyConfig,
    setting: &str,
    line: usize,
    dialect: Dialect,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some((key, value)) = setting.split_once('=') else {
        let token = setting.trim();
        if token == "enforce_for_root" {
            config.enforce_for_root = 1;
        } else if !dialect.ignores(token) && !dialect.is_directive_token(token) {
            #[cfg(feature = "tracing")]
            tracing::trace!("ignoring flag {:?} on line {}", token, line);
            warnings.push(ParseWarning::UnknownFlag {
                line,
                token: token.to_string(),
            });
        }
        return;
    };

    let key = key.trim();
    let value = value.trim();

    if dialect.ignores(key) {
        return;
    }

    let Some(field) = field_mut(config, key) else {
        #[cfg(feature = "tracing")]
        tracing::trace!("ignoring unknown key {:?} on line {}", key, line);
        warnings.push(ParseWarning::UnknownKey {
            line,
            key: key.to_string(),
        });
        return;
    };

    match value.parse::<i32>() {
        Ok(n) => *field = n,
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("ignoring invalid value for {} on line {}", key, line);
            warnings.push(ParseWarning::InvalidValue {
                line,
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
}

fn field_mut<'a>(config: &'a mut PolicyConfig, key: &str) -> Option<&'a mut i32> {
    let field = match key {
        "minlen" => &mut config.minlen,
        "dcredit" => &mut config.dcredit,
        "ucredit" => &mut config.ucredit,
        "lcredit" => &mut config.lcredit,
        "ocredit" => &mut config.ocredit,
        "minclass" => &mut config.minclass,
        "maxrepeat" => &mut config.maxrepeat,
        "maxclassrepeat" => &mut config.maxclassrepeat,
        "maxsequence" => &mut config.maxsequence,
        "enforcing" => &mut config.enforcing,
        "enforce_for_root" => &mut config.enforce_for_root,
        "usercheck" => &mut config.usercheck,
        _ => return None,
    };
    Some(field)
}
