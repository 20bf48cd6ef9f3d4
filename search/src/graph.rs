//! `SearchGraphV1`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEventV1`
//! entries: one per frontier pop, each listing every candidate action in
//! enumeration order with what the search did with it. Node summaries are a
//! derived index for path reconstruction.

use ferry_kernel::carrier::identity::IdentityBytes;
use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::policy::SearchPolicyV1;

/// Fingerprint of a state: SHA-256 over its identity bytes in the
/// `SearchNode` domain.
#[must_use]
pub fn state_fingerprint<S: IdentityBytes>(state: &S) -> ContentHash {
    canonical_hash(HashDomain::SearchNode, &state.identity_bytes())
}

/// Hex rendering of an action's identity bytes.
#[must_use]
pub fn action_hex<A: IdentityBytes>(action: &A) -> String {
    hex::encode(action.identity_bytes())
}

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphV1 {
    /// Ordered expansion events (normative decision surface).
    pub expansions: Vec<ExpandEventV1>,
    /// One summary per arena node, sorted by `node_id` ascending.
    pub node_summaries: Vec<SearchGraphNodeSummaryV1>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop and the candidates it generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Depth of the expanded node.
    pub depth: u32,
    /// Hex fingerprint of the expanded node's state.
    pub state_fingerprint: String,
    /// Candidates in `actions()` order.
    pub candidates: Vec<CandidateRecordV1>,
}

/// A candidate action with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecordV1 {
    /// Position in the `actions()` list.
    pub index: u64,
    /// Hex of the action's identity bytes.
    pub action_hex: String,
    /// Hex fingerprint of the resulting state.
    pub child_fingerprint: String,
    /// What the search did with the child.
    pub outcome: CandidateOutcomeV1,
}

/// Outcome of one candidate during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcomeV1 {
    /// New state; appended to the frontier as node `to_node`.
    Enqueued { to_node: u64 },
    /// Child is a goal; search stops with node `to_node`.
    GoalReached { to_node: u64 },
    /// Child state was already expanded.
    DuplicateExplored,
    /// Child state is already waiting in the frontier.
    DuplicateFrontier,
    /// Child would exceed `max_depth`.
    SkippedByDepthLimit,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphNodeSummaryV1 {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub depth: u32,
    pub state_fingerprint: String,
    /// Producing action (`None` for the root).
    pub action_hex: Option<String>,
    pub is_goal: bool,
    /// Pop order if this node was expanded.
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    pub problem_id: String,
    pub root_state_fingerprint: String,
    pub goal_state_fingerprint: String,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_depth_skips: u64,
    pub nodes_created: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,

    // Policy echo
    pub policy: SearchPolicyV1,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A goal state was reached at node `node_id` (0 when the root is a goal).
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal; the goal is unreachable.
    FrontierExhausted,
    /// Frontier emptied, but some children were cut by `max_depth`.
    DepthBudgetExceeded,
    /// `max_expansions` budget was hit with nodes still queued.
    ExpansionBudgetExceeded,
}

impl TerminationReasonV1 {
    /// Stable snake-case name used in JSON and fixture output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest: canonical hash of the canonical JSON bytes in the
    /// `SearchGraph` domain.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "state_fingerprint": e.state_fingerprint,
    })
}

fn candidate_record_to_json(r: &CandidateRecordV1) -> serde_json::Value {
    serde_json::json!({
        "action_hex": r.action_hex,
        "child_fingerprint": r.child_fingerprint,
        "index": r.index,
        "outcome": outcome_to_json(r.outcome),
    })
}

fn outcome_to_json(o: CandidateOutcomeV1) -> serde_json::Value {
    match o {
        CandidateOutcomeV1::Enqueued { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "enqueued"})
        }
        CandidateOutcomeV1::GoalReached { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "goal_reached"})
        }
        CandidateOutcomeV1::DuplicateExplored => {
            serde_json::json!({"type": "duplicate_explored"})
        }
        CandidateOutcomeV1::DuplicateFrontier => {
            serde_json::json!({"type": "duplicate_frontier"})
        }
        CandidateOutcomeV1::SkippedByDepthLimit => {
            serde_json::json!({"type": "skipped_by_depth_limit"})
        }
    }
}

fn node_summary_to_json(n: &SearchGraphNodeSummaryV1) -> serde_json::Value {
    serde_json::json!({
        "action_hex": n.action_hex,
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "state_fingerprint": n.state_fingerprint,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "goal_state_fingerprint": m.goal_state_fingerprint,
        "nodes_created": m.nodes_created,
        "policy": m.policy.to_json_value(),
        "problem_id": m.problem_id,
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_depth_skips": m.total_depth_skips,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
    })
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        _ => serde_json::json!({"type": r.as_str()}),
    }
}
