//! Search graph determinism and accounting.
//!
//! Proves:
//! 1. Repeated searches produce identical canonical bytes and digests
//! 2. Metadata counters for the classic puzzle are exact
//! 3. Node summaries reconstruct the solution path
//! 4. The digest is sensitive to the policy echo

use ferry_harness::worlds::river_crossing::RiverCrossingProblem;
use ferry_search::graph::{state_fingerprint, CandidateOutcomeV1, TerminationReasonV1};
use ferry_search::policy::SearchPolicyV1;
use ferry_search::search::search;

#[test]
fn repeated_searches_are_byte_identical() {
    let problem = RiverCrossingProblem::classic();
    let policy = SearchPolicyV1::default();
    let first = search(&problem, &policy).unwrap().graph;
    for _ in 0..5 {
        let again = search(&problem, &policy).unwrap().graph;
        assert_eq!(
            first.to_canonical_json_bytes().unwrap(),
            again.to_canonical_json_bytes().unwrap()
        );
        assert_eq!(first.digest().unwrap(), again.digest().unwrap());
    }
}

#[test]
fn classic_puzzle_counters() {
    let result = search(&RiverCrossingProblem::classic(), &SearchPolicyV1::default()).unwrap();
    let m = &result.graph.metadata;
    assert_eq!(m.problem_id, "river_crossing");
    assert_eq!(m.total_expansions, 9);
    assert_eq!(m.total_candidates_generated, 19);
    assert_eq!(m.total_duplicates_suppressed, 10);
    assert_eq!(m.total_depth_skips, 0);
    assert_eq!(m.nodes_created, 10);
    assert_eq!(m.frontier_high_water, 2);
    assert_eq!(m.termination_reason, TerminationReasonV1::GoalReached { node_id: 9 });
}

#[test]
fn last_expansion_ends_with_goal_candidate() {
    let result = search(&RiverCrossingProblem::classic(), &SearchPolicyV1::default()).unwrap();
    let last = result.graph.expansions.last().unwrap();
    let final_candidate = last.candidates.last().unwrap();
    assert_eq!(final_candidate.outcome, CandidateOutcomeV1::GoalReached { to_node: 9 });
    assert_eq!(final_candidate.action_hex, "a0");
    assert_eq!(
        last.state_fingerprint,
        state_fingerprint(&result.path[result.path.len() - 2])
            .hex_digest()
            .to_string()
    );
}

#[test]
fn expansion_orders_are_dense() {
    let result = search(&RiverCrossingProblem::classic(), &SearchPolicyV1::default()).unwrap();
    for (i, event) in result.graph.expansions.iter().enumerate() {
        assert_eq!(event.expansion_order, i as u64);
    }
}

#[test]
fn node_summaries_walk_back_to_root() {
    let result = search(&RiverCrossingProblem::classic(), &SearchPolicyV1::default()).unwrap();
    let summaries = &result.graph.node_summaries;
    let goal = summaries.iter().find(|n| n.is_goal).unwrap();

    let mut hops = Vec::new();
    let mut at = goal;
    while let Some(parent) = at.parent_id {
        hops.push(at.action_hex.clone().unwrap());
        at = &summaries[usize::try_from(parent).unwrap()];
    }
    hops.reverse();
    assert_eq!(hops, ["a0", "08", "c0", "0a", "90", "08", "a0"]);
    assert_eq!(at.node_id, 0);
    assert!(at.action_hex.is_none());
    assert_eq!(at.expansion_order, Some(0));
    assert_eq!(goal.expansion_order, None);
}

#[test]
fn digest_binds_policy() {
    let problem = RiverCrossingProblem::classic();
    let unbounded = search(&problem, &SearchPolicyV1::default()).unwrap().graph;
    let capped = search(
        &problem,
        &SearchPolicyV1 {
            max_expansions: Some(1000),
            ..SearchPolicyV1::default()
        },
    )
    .unwrap()
    .graph;
    assert_eq!(unbounded.expansions, capped.expansions);
    assert_ne!(unbounded.digest().unwrap(), capped.digest().unwrap());
}

#[test]
fn canonical_bytes_carry_termination_tag() {
    let graph = search(&RiverCrossingProblem::classic(), &SearchPolicyV1::default())
        .unwrap()
        .graph;
    let text = String::from_utf8(graph.to_canonical_json_bytes().unwrap()).unwrap();
    assert!(text.contains(r#""termination_reason":{"node_id":9,"type":"goal_reached"}"#), "{text}");
    assert!(graph.digest().unwrap().as_str().starts_with("sha256:"));
}
