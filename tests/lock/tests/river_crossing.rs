//! Wolf, goat and cabbage acceptance tests.
//!
//! Proves:
//! 1. The classic puzzle solves in exactly seven crossings, with the exact
//!    crossing sequence fixed by the move table's order
//! 2. Every configuration on the solution path is one of the ten safe ones
//! 3. The peasant rides every crossing and the boat alternates banks
//! 4. Rendering produces one line per crossing with the expected text

use ferry_harness::render::{describe, render_solution};
use ferry_harness::worlds::river_crossing::{
    Bank, Entity, Ferry, RiverCrossingProblem, GOAL_BITS, LEGAL_CONFIGURATIONS, START_BITS,
};
use ferry_kernel::carrier::placement::Side;
use ferry_search::contract::SearchProblemV1;
use ferry_search::policy::SearchPolicyV1;
use ferry_search::search::{breadth_first_search, search};

const EXPECTED_SOLUTION: [u32; 7] = [0xA0, 0x08, 0xC0, 0x0A, 0x90, 0x08, 0xA0];
const EXPECTED_PATH: [u32; 8] = [0x0F, 0xA5, 0x2D, 0xE1, 0x4B, 0xD2, 0x5A, 0xF0];

#[test]
fn classic_puzzle_solves_in_seven_crossings() {
    let solution = breadth_first_search(&RiverCrossingProblem::classic());
    let bits: Vec<u32> = solution.iter().map(Ferry::to_bits).collect();
    assert_eq!(bits, EXPECTED_SOLUTION);
}

#[test]
fn solution_path_stays_in_safe_configurations() {
    let result = search(&RiverCrossingProblem::classic(), &SearchPolicyV1::default()).unwrap();
    let path: Vec<u32> = result.path.iter().map(Bank::to_bits).collect();
    assert_eq!(path, EXPECTED_PATH);
    assert_eq!(path.first(), Some(&START_BITS));
    assert_eq!(path.last(), Some(&GOAL_BITS));
    for bits in path {
        assert!(
            LEGAL_CONFIGURATIONS.contains(&bits),
            "{bits:#04x} is not a legal configuration"
        );
    }
}

#[test]
fn replaying_the_solution_reaches_the_goal() {
    let problem = RiverCrossingProblem::classic();
    let solution = breadth_first_search(&problem);
    let mut bank = problem.initial_state();
    for ferry in &solution {
        assert!(
            problem.actions(&bank).contains(ferry),
            "{:#04x} not legal in {:#04x}",
            ferry.to_bits(),
            bank.to_bits()
        );
        bank = problem.result(&bank, ferry);
    }
    assert!(problem.is_goal(&bank));
}

#[test]
fn peasant_rides_every_crossing_and_banks_alternate() {
    let solution = breadth_first_search(&RiverCrossingProblem::classic());
    let mut expected_side = Side::Left;
    for ferry in &solution {
        assert!(ferry.moves(Entity::Peasant.index()));
        assert!(ferry.passenger_count() <= 2);
        assert_eq!(ferry.to(), expected_side);
        expected_side = expected_side.opposite();
    }
    // Odd number of crossings: the boat ends on the far bank.
    assert_eq!(solution.len() % 2, 1);
}

#[test]
fn rendered_solution_reads_as_expected() {
    let solution = breadth_first_search(&RiverCrossingProblem::classic());
    assert_eq!(
        render_solution(&solution),
        vec![
            "Peasant and goat crosses left.",
            "Peasant crosses right.",
            "Peasant and cabbage crosses left.",
            "Peasant and goat crosses right.",
            "Peasant and wolf crosses left.",
            "Peasant crosses right.",
            "Peasant and goat crosses left.",
        ]
    );
}

#[test]
fn far_bank_has_no_way_back() {
    // The table has no moves out of the goal, so from the far bank there is
    // nothing to do.
    let problem = RiverCrossingProblem::new(
        Bank::from_bits(GOAL_BITS).unwrap(),
        Bank::from_bits(START_BITS).unwrap(),
    );
    let result = search(&problem, &SearchPolicyV1::default()).unwrap();
    assert!(result.solution.is_empty());
    assert!(!result.is_goal_reached());
    assert_eq!(result.graph.metadata.total_expansions, 1);
}

#[test]
fn intermediate_goal_is_reached_by_prefix() {
    // Goat alone on the far bank, peasant back home: two crossings.
    let problem = RiverCrossingProblem::new(
        Bank::from_bits(START_BITS).unwrap(),
        Bank::from_bits(0x2D).unwrap(),
    );
    let bits: Vec<u32> = breadth_first_search(&problem)
        .iter()
        .map(Ferry::to_bits)
        .collect();
    assert_eq!(bits, vec![0xA0, 0x08]);
    assert_eq!(describe(bits[1]), Some("Peasant crosses right."));
}
