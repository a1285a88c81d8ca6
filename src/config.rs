//! The policy rule set.

/// A set of pwquality / cracklib rules.
///
/// Every field defaults to 0 except `enforcing`, which defaults to 1.
/// Credit fields (`dcredit`, `ucredit`, `lcredit`, `ocredit`) are signed:
/// `-k` requires at least `k` characters of the class, `+k` means each
/// character of the class adds `k` to the effective length (and at least
/// one must be present), `0` disables the class check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyConfig {
    /// Minimum effective length; 0 disables the check.
    pub minlen: i32,
    pub dcredit: i32,
    pub ucredit: i32,
    pub lcredit: i32,
    pub ocredit: i32,
    /// Minimum number of distinct character classes.
    pub minclass: i32,
    /// Longest allowed run of one identical character; 0 is unlimited.
    pub maxrepeat: i32,
    /// Longest allowed run of characters from one class; 0 is unlimited.
    pub maxclassrepeat: i32,
    /// Longest allowed ascending or descending sequence; 0 is unlimited.
    pub maxsequence: i32,
    pub enforcing: i32,
    pub enforce_for_root: i32,
    /// Reject passwords containing the username or its reverse.
    pub usercheck: i32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            minlen: 0,
            dcredit: 0,
            ucredit: 0,
            lcredit: 0,
            ocredit: 0,
            minclass: 0,
            maxrepeat: 0,
            maxclassrepeat: 0,
            maxsequence: 0,
            enforcing: 1,
            enforce_for_root: 0,
            usercheck: 0,
        }
    }
}

/// The account a password is being checked for, see
/// [`PolicyConfig::validate_for`](crate::PolicyConfig::validate_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User,
    Root,
}

impl PolicyConfig {
    /// True if any rule that `validate` checks unconditionally is active.
    ///
    /// `enforcing`, `enforce_for_root` and `usercheck` do not count.
    pub fn has_any_policy(&self) -> bool {
        self.minlen > 0
            || self.dcredit != 0
            || self.ucredit != 0
            || self.lcredit != 0
            || self.ocredit != 0
            || self.minclass > 0
            || self.maxrepeat > 0
            || self.maxclassrepeat > 0
            || self.maxsequence > 0
    }

    /// Any nonzero `enforcing` value counts as enforcing.
    pub fn is_enforcing(&self) -> bool {
        self.enforcing != 0
    }

    /// Only `enforce_for_root == 1` counts; other nonzero values do not.
    pub fn is_enforcing_for_root(&self) -> bool {
        self.enforce_for_root == 1
    }

    /// Whether the enforcement flags require checking a password for `principal`.
    pub fn applies_to(&self, principal: Principal) -> bool {
        match principal {
            Principal::User => self.is_enforcing(),
            Principal::Root => self.is_enforcing() && self.is_enforcing_for_root(),
        }
    }

    /// Sum of the minimum counts demanded by negative credits.
    pub(crate) fn required_class_chars(&self) -> usize {
        [self.dcredit, self.ucredit, self.lcredit, self.ocredit]
            .iter()
            .filter(|&&credit| credit < 0)
            .map(|&credit| credit.unsigned_abs() as usize)
            .sum()
    }
}
