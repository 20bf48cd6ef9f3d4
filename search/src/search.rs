//! Search entry points and the breadth-first expansion loop.
//!
//! Both entry points share one loop. [`search`] hands it a recorder that
//! builds the [`SearchGraphV1`] audit trail; [`breadth_first_search`] hands it
//! one that records nothing, so the plain path never hashes a state.

use std::collections::HashMap;

use ferry_kernel::carrier::identity::IdentityBytes;
use tracing::{debug, trace};

use crate::contract::SearchProblemV1;
use crate::error::SearchError;
use crate::frontier::{ExploredSet, FifoFrontier};
use crate::graph::{
    action_hex, state_fingerprint, CandidateOutcomeV1, CandidateRecordV1, ExpandEventV1,
    SearchGraphMetadata, SearchGraphNodeSummaryV1, SearchGraphV1, TerminationReasonV1,
};
use crate::node::{NodeArenaV1, NodeId};
use crate::policy::SearchPolicyV1;

/// Result of a search execution.
///
/// Holds values copied out of the node arena; the arena itself is dropped
/// when [`search`] returns. Check [`SearchResult::is_goal_reached`] to tell
/// "the initial state is the goal" (empty solution, goal reached) from "no
/// solution" (empty solution, not reached).
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    /// Actions from the initial state to the goal. Empty if no goal was
    /// reached or the initial state is the goal.
    pub solution: Vec<A>,
    /// States from the initial state to the goal inclusive. Empty if no goal
    /// was reached.
    pub path: Vec<S>,
    /// The complete search audit trail.
    pub graph: SearchGraphV1,
}

impl<S, A> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    /// Why the search stopped.
    #[must_use]
    pub fn termination_reason(&self) -> TerminationReasonV1 {
        self.graph.metadata.termination_reason
    }
}

/// Breadth-first search with the unbounded policy, returning only the actions.
///
/// Returns the shortest action sequence (by action count) from the initial
/// state to the goal, or an empty sequence when the goal is unreachable or the
/// initial state already is the goal. No audit trail is built.
pub fn breadth_first_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblemV1 + ?Sized,
{
    let outcome = run(problem, &SearchPolicyV1::unbounded(), &mut NoRecording);
    outcome
        .goal
        .map_or_else(Vec::new, |id| outcome.arena.solution(id))
}

/// Run breadth-first graph search and return the solution with its audit trail.
///
/// Every runtime termination (goal, exhaustion, budget) returns
/// `Ok(SearchResult)`; see `graph.metadata.termination_reason`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No search steps are taken in that case.
pub fn search<P>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblemV1 + ?Sized,
{
    policy.validate()?;
    let mut recorder = GraphRecorder::default();
    let outcome = run(problem, policy, &mut recorder);
    Ok(finish(problem, policy, outcome, recorder))
}

/// Observer of the loop's decisions, called in expansion order.
trait Recorder<S, A> {
    /// `node_id` was popped and is about to be expanded.
    fn begin_expansion(&mut self, node_id: NodeId, depth: u32, state: &S);

    /// Candidate `index` of the current expansion was classified.
    fn candidate(
        &mut self,
        index: usize,
        action: Option<&A>,
        state: &S,
        outcome: CandidateOutcomeV1,
    );

    /// The current expansion is complete.
    fn end_expansion(&mut self);
}

/// Recorder for [`breadth_first_search`].
struct NoRecording;

impl<S, A> Recorder<S, A> for NoRecording {
    fn begin_expansion(&mut self, _node_id: NodeId, _depth: u32, _state: &S) {}

    fn candidate(
        &mut self,
        _index: usize,
        _action: Option<&A>,
        _state: &S,
        _outcome: CandidateOutcomeV1,
    ) {
    }

    fn end_expansion(&mut self) {}
}

/// Recorder for [`search`]: accumulates the expansion events.
#[derive(Debug, Default)]
struct GraphRecorder {
    expansions: Vec<ExpandEventV1>,
    expansion_index: HashMap<NodeId, u64>,
    current: Option<ExpandEventV1>,
}

impl<S, A> Recorder<S, A> for GraphRecorder
where
    S: IdentityBytes,
    A: IdentityBytes,
{
    fn begin_expansion(&mut self, node_id: NodeId, depth: u32, state: &S) {
        let expansion_order = self.expansions.len() as u64;
        self.expansion_index.insert(node_id, expansion_order);
        self.current = Some(ExpandEventV1 {
            expansion_order,
            node_id: node_id.as_u64(),
            depth,
            state_fingerprint: state_fingerprint(state).hex_digest().to_string(),
            candidates: Vec::new(),
        });
    }

    fn candidate(
        &mut self,
        index: usize,
        action: Option<&A>,
        state: &S,
        outcome: CandidateOutcomeV1,
    ) {
        if let Some(event) = self.current.as_mut() {
            event.candidates.push(CandidateRecordV1 {
                index: index as u64,
                action_hex: action.map_or_else(String::new, action_hex),
                child_fingerprint: state_fingerprint(state).hex_digest().to_string(),
                outcome,
            });
        }
    }

    fn end_expansion(&mut self) {
        if let Some(event) = self.current.take() {
            self.expansions.push(event);
        }
    }
}

/// Running totals reported in the graph metadata.
#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    candidates_generated: u64,
    duplicates_suppressed: u64,
    depth_skips: u64,
}

/// Everything the loop leaves behind once it stops.
struct Outcome<S, A> {
    arena: NodeArenaV1<S, A>,
    counters: Counters,
    frontier_high_water: u64,
    termination_reason: TerminationReasonV1,
    goal: Option<NodeId>,
}

fn run<P, R>(
    problem: &P,
    policy: &SearchPolicyV1,
    recorder: &mut R,
) -> Outcome<P::State, P::Action>
where
    P: SearchProblemV1 + ?Sized,
    R: Recorder<P::State, P::Action>,
{
    let root_state = problem.initial_state();
    let mut arena: NodeArenaV1<P::State, P::Action> = NodeArenaV1::with_root(root_state.clone());
    let mut frontier = FifoFrontier::new();
    let mut explored = ExploredSet::new();
    let mut counters = Counters::default();

    debug!(problem_id = problem.problem_id(), ?policy, "search started");

    // The root's solution is empty; `actions` is never consulted.
    if problem.is_goal(&root_state) {
        debug!(problem_id = problem.problem_id(), "initial state is the goal");
        return Outcome {
            arena,
            counters,
            frontier_high_water: frontier.high_water(),
            termination_reason: TerminationReasonV1::GoalReached { node_id: 0 },
            goal: Some(NodeId::ROOT),
        };
    }

    frontier.push(NodeId::ROOT, &root_state);

    let (termination_reason, goal) = loop {
        if !frontier.is_empty() && policy.expansions_exhausted(counters.expansions) {
            debug!(
                expansions = counters.expansions,
                queued = frontier.len(),
                "expansion budget exhausted"
            );
            break (TerminationReasonV1::ExpansionBudgetExceeded, None);
        }

        let Some(current) = frontier.pop() else {
            let reason = if counters.depth_skips > 0 {
                TerminationReasonV1::DepthBudgetExceeded
            } else {
                TerminationReasonV1::FrontierExhausted
            };
            debug!(expansions = counters.expansions, reason = reason.as_str(), "frontier empty");
            break (reason, None);
        };

        let current_depth = {
            let node = arena.get(current);
            explored.insert(node.state.clone());
            recorder.begin_expansion(current, node.depth, &node.state);
            node.depth
        };
        counters.expansions += 1;

        let children = arena.expand(current, problem);
        trace!(
            node_id = current.as_u64(),
            depth = current_depth,
            candidates = children.len(),
            "expanding"
        );

        let mut goal = None;
        for (index, child) in children.into_iter().enumerate() {
            counters.candidates_generated += 1;

            let next_id = arena.len() as u64;
            let outcome = if !policy.allows_depth(child.depth) {
                counters.depth_skips += 1;
                CandidateOutcomeV1::SkippedByDepthLimit
            } else if problem.is_goal(&child.state) {
                CandidateOutcomeV1::GoalReached { to_node: next_id }
            } else if explored.contains(&child.state) {
                counters.duplicates_suppressed += 1;
                trace!(index, "discarded: state already explored");
                CandidateOutcomeV1::DuplicateExplored
            } else if frontier.contains_state(&child.state) {
                counters.duplicates_suppressed += 1;
                trace!(index, "discarded: state already queued");
                CandidateOutcomeV1::DuplicateFrontier
            } else {
                CandidateOutcomeV1::Enqueued { to_node: next_id }
            };
            recorder.candidate(index, child.action.as_ref(), &child.state, outcome);

            match outcome {
                CandidateOutcomeV1::GoalReached { .. } => {
                    goal = Some(arena.push(child));
                    break;
                }
                CandidateOutcomeV1::Enqueued { .. } => {
                    let id = arena.push(child);
                    frontier.push(id, &arena.get(id).state);
                }
                CandidateOutcomeV1::DuplicateExplored
                | CandidateOutcomeV1::DuplicateFrontier
                | CandidateOutcomeV1::SkippedByDepthLimit => {}
            }
        }
        recorder.end_expansion();

        if let Some(goal_id) = goal {
            debug!(
                node_id = goal_id.as_u64(),
                depth = arena.get(goal_id).depth,
                expansions = counters.expansions,
                "goal reached"
            );
            break (
                TerminationReasonV1::GoalReached {
                    node_id: goal_id.as_u64(),
                },
                Some(goal_id),
            );
        }
    };

    Outcome {
        arena,
        counters,
        frontier_high_water: frontier.high_water(),
        termination_reason,
        goal,
    }
}

/// Copy the solution out of the arena and assemble the audit graph.
fn finish<P>(
    problem: &P,
    policy: &SearchPolicyV1,
    outcome: Outcome<P::State, P::Action>,
    recorder: GraphRecorder,
) -> SearchResult<P::State, P::Action>
where
    P: SearchProblemV1 + ?Sized,
{
    let Outcome {
        arena,
        counters,
        frontier_high_water,
        termination_reason,
        goal,
    } = outcome;
    let GraphRecorder {
        expansions,
        expansion_index,
        ..
    } = recorder;

    let (solution, path) = match goal {
        Some(id) => (arena.solution(id), arena.path_states(id)),
        None => (Vec::new(), Vec::new()),
    };

    let node_summaries: Vec<SearchGraphNodeSummaryV1> = arena
        .iter()
        .map(|(id, node)| SearchGraphNodeSummaryV1 {
            node_id: id.as_u64(),
            parent_id: node.parent.map(NodeId::as_u64),
            depth: node.depth,
            state_fingerprint: state_fingerprint(&node.state).hex_digest().to_string(),
            action_hex: node.action.as_ref().map(action_hex),
            is_goal: goal == Some(id),
            expansion_order: expansion_index.get(&id).copied(),
        })
        .collect();

    let root_state = &arena.get(NodeId::ROOT).state;
    let graph = SearchGraphV1 {
        metadata: SearchGraphMetadata {
            problem_id: problem.problem_id().to_string(),
            root_state_fingerprint: state_fingerprint(root_state).hex_digest().to_string(),
            goal_state_fingerprint: state_fingerprint(&problem.goal_state())
                .hex_digest()
                .to_string(),
            total_expansions: counters.expansions,
            total_candidates_generated: counters.candidates_generated,
            total_duplicates_suppressed: counters.duplicates_suppressed,
            total_depth_skips: counters.depth_skips,
            nodes_created: arena.len() as u64,
            frontier_high_water,
            termination_reason,
            policy: policy.clone(),
        },
        expansions,
        node_summaries,
    };

    SearchResult {
        solution,
        path,
        graph,
    }
}
