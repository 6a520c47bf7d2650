//! Repository download policy
//!
//! Update and checksum policies are forwarded verbatim from configuration to
//! the resolver. Defaults are permissive: always update, ignore checksums.

/// Re-check remote metadata on every access
pub const UPDATE_POLICY_ALWAYS: &str = "always";

/// Do not verify checksums
pub const CHECKSUM_POLICY_IGNORE: &str = "ignore";

/// Download policy attached to every repository in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPolicy {
    pub enabled: bool,
    pub update_policy: String,
    pub checksum_policy: String,
}

impl RepositoryPolicy {
    /// Build a policy from optional configuration strings, permissive defaults
    pub fn from_options(update_policy: Option<&str>, checksum_policy: Option<&str>) -> Self {
        Self {
            enabled: true,
            update_policy: update_policy.unwrap_or(UPDATE_POLICY_ALWAYS).to_string(),
            checksum_policy: checksum_policy.unwrap_or(CHECKSUM_POLICY_IGNORE).to_string(),
        }
    }
}

impl Default for RepositoryPolicy {
    fn default() -> Self {
        Self::from_options(None, None)
    }
}
