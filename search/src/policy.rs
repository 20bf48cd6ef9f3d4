//! Search policy types.

use crate::error::SearchError;

/// Optional budgets for one search.
///
/// The default policy is unbounded: the search runs until it finds a goal or
/// the frontier empties, which terminates for any finite reachable state
/// space. Budgets exist for callers who need bounded iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions (frontier pops).
    pub max_expansions: Option<u64>,
    /// Depth cutoff: children deeper than this are not generated into the tree.
    pub max_depth: Option<u32>,
}

impl SearchPolicyV1 {
    /// An unbounded policy.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Validate that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero (the
    /// root could never be expanded) or `max_depth` is zero (no action could
    /// ever be taken).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_depth == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` completed pops exhaust the expansion budget.
    #[must_use]
    pub fn expansions_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }

    /// Whether a node at `depth` is within the depth cutoff.
    #[must_use]
    pub fn allows_depth(&self, depth: u32) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }

    /// Canonical JSON echo of the policy (absent budgets are `null`).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }
}
