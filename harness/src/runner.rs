//! Harness runner: resolves policy, runs the search, packages a report.
//!
//! The runner uses ONLY search and kernel APIs. It does not implement any
//! search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! build_policy() → policy_snapshot() → search()
//!   → render_solution() → graph digest → canonical report → report digest
//! ```

use std::fmt;

use tracing::debug;

use ferry_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ferry_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use ferry_search::contract::SearchProblemV1;
use ferry_search::error::SearchError;
use ferry_search::graph::{SearchGraphV1, TerminationReasonV1};
use ferry_search::search::search;

use crate::policy::{build_policy, policy_snapshot, ConfigError, PolicyConfig, PolicySnapshotV1};
use crate::render::render_solution;
use crate::worlds::river_crossing::RiverCrossingProblem;

/// Domain prefix for run report hashing.
pub const DOMAIN_RUN_REPORT: HashDomain = HashDomain::RunReport;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Policy configuration could not be read.
    InvalidConfig(ConfigError),
    /// The search rejected the resolved policy.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed(CanonError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid configuration: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::CanonFailed(e) => write!(f, "canonical serialization failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::CanonFailed(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed(e)
    }
}

/// Everything one river crossing run produced.
#[derive(Debug, Clone)]
pub struct SearchReportV1 {
    /// Problem identifier from the world.
    pub problem_id: String,
    /// Crossing bit patterns, in solution order.
    pub solution_bits: Vec<u32>,
    /// Rendered text, one line per recognized crossing.
    pub lines: Vec<&'static str>,
    /// Placement bit patterns from the initial state to the goal inclusive.
    pub path_bits: Vec<u32>,
    /// Why the search stopped.
    pub termination_reason: TerminationReasonV1,
    /// The search audit trail.
    pub graph: SearchGraphV1,
    /// `graph.digest()`.
    pub graph_digest: ContentHash,
    /// The policy the run executed under.
    pub policy_snapshot: PolicySnapshotV1,
    /// Canonical JSON bytes of the report.
    pub report_bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_RUN_REPORT, report_bytes)`.
    pub digest: ContentHash,
}

impl SearchReportV1 {
    /// Returns `true` if the run reached the goal.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }
}

/// Run the river crossing `problem` under `config`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the resolved policy is invalid, or
/// [`RunError::CanonFailed`] if an artifact cannot be serialized.
pub fn run_search(
    problem: &RiverCrossingProblem,
    config: &PolicyConfig,
) -> Result<SearchReportV1, RunError> {
    let policy = build_policy(config);
    let snapshot = policy_snapshot(problem.problem_id(), &policy)?;

    let result = search(problem, &policy)?;

    let solution_bits: Vec<u32> = result.solution.iter().map(|f| f.to_bits()).collect();
    let path_bits: Vec<u32> = result.path.iter().map(|b| b.to_bits()).collect();
    let lines = render_solution(&result.solution);
    let termination_reason = result.termination_reason();
    let graph_digest = result.graph.digest()?;

    let report_json = serde_json::json!({
        "goal_reached": result.is_goal_reached(),
        "lines": lines,
        "path": path_bits,
        "policy_digest": snapshot.digest.as_str(),
        "problem_id": problem.problem_id(),
        "schema_version": "search_report.v1",
        "search_graph_digest": graph_digest.as_str(),
        "solution": solution_bits,
        "termination_reason": termination_reason.as_str(),
        "total_expansions": result.graph.metadata.total_expansions,
    });
    let report_bytes = canonical_json_bytes(&report_json)?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &report_bytes);

    debug!(
        problem_id = problem.problem_id(),
        moves = solution_bits.len(),
        termination = termination_reason.as_str(),
        report_digest = digest.as_str(),
        "run complete"
    );

    Ok(SearchReportV1 {
        problem_id: problem.problem_id().to_string(),
        solution_bits,
        lines,
        path_bits,
        termination_reason,
        graph: result.graph,
        graph_digest,
        policy_snapshot: snapshot,
        report_bytes,
        digest,
    })
}
