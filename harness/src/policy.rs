//! Run policy: resolving budgets and snapshotting them for the report.
//!
//! The runner turns a [`PolicyConfig`] into a [`SearchPolicyV1`] and derives a
//! [`PolicySnapshotV1`] from it, so every report commits to the conditions it
//! was produced under. Worlds do NOT declare policy.

use std::fmt;
use std::str::FromStr;

use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use ferry_search::policy::SearchPolicyV1;

/// Domain prefix for policy snapshot hashing (harness-originated).
pub const DOMAIN_POLICY_SNAPSHOT: HashDomain = HashDomain::PolicySnapshot;

/// Environment variable overriding [`PolicyConfig::max_expansions`].
pub const ENV_MAX_EXPANSIONS: &str = "FERRY_MAX_EXPANSIONS";

/// Environment variable overriding [`PolicyConfig::max_depth`].
pub const ENV_MAX_DEPTH: &str = "FERRY_MAX_DEPTH";

/// Policy configuration that can override defaults.
///
/// Every field defaults to `None`, meaning unbounded. Zero values are not
/// rejected here; [`SearchPolicyV1::validate`] does that when the run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Cap on node expansions. `None` is unbounded.
    pub max_expansions: Option<u64>,
    /// Depth cutoff. `None` is unbounded.
    pub max_depth: Option<u32>,
}

/// A configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        detail: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value, detail } => {
                write!(f, "{key}={value:?} is not a valid budget: {detail}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl PolicyConfig {
    /// Read overrides from `FERRY_MAX_EXPANSIONS` and `FERRY_MAX_DEPTH`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to something
    /// that is not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its
    /// value. Unset and blank values leave the budget unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            max_expansions: parse_budget(&lookup, ENV_MAX_EXPANSIONS)?,
            max_depth: parse_budget(&lookup, ENV_MAX_DEPTH)?,
        })
    }
}

fn parse_budget<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            detail: e.to_string(),
            value,
        })
}

/// Resolve a [`SearchPolicyV1`] from config.
#[must_use]
pub fn build_policy(config: &PolicyConfig) -> SearchPolicyV1 {
    SearchPolicyV1 {
        max_expansions: config.max_expansions,
        max_depth: config.max_depth,
    }
}

/// In-memory policy snapshot for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySnapshotV1 {
    /// Canonical JSON bytes of the policy snapshot.
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_POLICY_SNAPSHOT, bytes)`.
    pub digest: ContentHash,
}

/// Snapshot the policy a run of `problem_id` executes under.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails.
pub fn policy_snapshot(
    problem_id: &str,
    policy: &SearchPolicyV1,
) -> Result<PolicySnapshotV1, CanonError> {
    let json = serde_json::json!({
        "algorithm": "breadth_first",
        "problem_id": problem_id,
        "schema_version": "policy_snapshot.v1",
        "search": policy.to_json_value(),
    });
    let bytes = canonical_json_bytes(&json)?;
    let digest = canonical_hash(DOMAIN_POLICY_SNAPSHOT, &bytes);
    Ok(PolicySnapshotV1 { bytes, digest })
}
