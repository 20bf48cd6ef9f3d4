//! Search problem contract trait.

use std::hash::Hash;

use ferry_kernel::carrier::identity::IdentityBytes;

/// Trait for problems that support breadth-first search.
///
/// # Contract
///
/// - `actions` must be a pure function of `state`. Its order is the sibling
///   tie-break order: when several shortest solutions exist, the one whose
///   actions were enumerated first wins.
/// - `actions` returns an empty list for terminal or unrecognized states.
/// - `result` is deterministic. Calling it with an action that `actions` did
///   not return for that state is unspecified; implementations need not check.
/// - The reachable state space must be finite for the search to terminate.
pub trait SearchProblemV1 {
    /// World configuration. Dedup compares states with `Eq`/`Hash`.
    type State: Clone + Eq + Hash + IdentityBytes;

    /// Transition identifier.
    type Action: Clone + Eq + IdentityBytes;

    /// Stable identifier recorded in search graph metadata.
    fn problem_id(&self) -> &str;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// The designated goal state.
    fn goal_state(&self) -> Self::State;

    /// Every action legal in `state`, in tie-break order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state produced by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Goal test: `state == goal_state()`.
    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal_state()
    }
}
