//! Binary that runs the classic river crossing through the harness runner
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! The policy is fixed (unbounded); the environment is never consulted.
//!
//! Output: key=value lines (see source for format).

use ferry_harness::policy::PolicyConfig;
use ferry_harness::runner::run_search;
use ferry_harness::worlds::river_crossing::RiverCrossingProblem;

fn hex_list(bits: &[u32]) -> String {
    bits.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn main() {
    let report = run_search(&RiverCrossingProblem::classic(), &PolicyConfig::default())
        .expect("search run failed");
    let metadata = &report.graph.metadata;

    println!("report_digest={}", report.digest.as_str());
    println!("search_graph_digest={}", report.graph_digest.as_str());
    println!("policy_digest={}", report.policy_snapshot.digest.as_str());
    println!("termination_reason={}", report.termination_reason.as_str());
    println!("total_expansions={}", metadata.total_expansions);
    println!("nodes_created={}", metadata.nodes_created);
    println!("solution={}", hex_list(&report.solution_bits));
    println!("path={}", hex_list(&report.path_bits));
}
