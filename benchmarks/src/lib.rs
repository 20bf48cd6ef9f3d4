//! Shared helpers for ferry benchmark suites.
//!
//! Benchmarks run on synthetic grid worlds large enough to make the frontier
//! and the explored set do real work, plus the river crossing puzzle itself.

use ferry_kernel::proof::hash::{canonical_hash, HashDomain};
use ferry_search::contract::SearchProblemV1;
use ferry_search::policy::SearchPolicyV1;
use ferry_search::search::{search, SearchResult};

/// Grid moves, in enumeration order.
const DIRECTIONS: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A rectangular grid with blocked cells. States are cell indices
/// (`y * width + x`); actions are direction indices into north, east, south,
/// west.
#[derive(Debug, Clone)]
pub struct GridProblem {
    width: u32,
    height: u32,
    walls: Vec<bool>,
    goal: u32,
}

impl GridProblem {
    /// Open grid from the top-left corner to the bottom-right corner.
    #[must_use]
    pub fn open(width: u32, height: u32) -> Self {
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            walls: vec![false; cells],
            goal: width * height - 1,
        }
    }

    /// Grid with roughly `density_percent` of cells walled, chosen
    /// deterministically from `seed`. Start and goal corners stay open.
    #[must_use]
    pub fn scattered(width: u32, height: u32, density_percent: u8, seed: u64) -> Self {
        let mut grid = Self::open(width, height);
        let threshold = u32::from(density_percent) * 256 / 100;
        for cell in 1..grid.goal {
            let mut input = seed.to_le_bytes().to_vec();
            input.extend_from_slice(&cell.to_le_bytes());
            let digest = canonical_hash(HashDomain::BenchInput, &input);
            let byte = u32::from_str_radix(&digest.hex_digest()[..2], 16).unwrap_or(u32::MAX);
            grid.walls[cell as usize] = byte < threshold;
        }
        grid
    }

    /// Copy of this grid with every neighbour of the goal walled off.
    #[must_use]
    pub fn with_goal_sealed(mut self) -> Self {
        let goal = self.goal;
        for dir in 0..DIRECTIONS.len() {
            if let Some(cell) = self.step(goal, dir) {
                self.walls[cell as usize] = true;
            }
        }
        self
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    fn step(&self, cell: u32, dir: usize) -> Option<u32> {
        let (dx, dy) = DIRECTIONS[dir];
        let x = i64::from(cell % self.width) + dx;
        let y = i64::from(cell / self.width) + dy;
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        let next = u32::try_from(y * i64::from(self.width) + x).ok()?;
        (!self.walls[next as usize]).then_some(next)
    }
}

impl SearchProblemV1 for GridProblem {
    type State = u32;
    type Action = u8;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "bench_grid"
    }

    fn initial_state(&self) -> u32 {
        0
    }

    fn goal_state(&self) -> u32 {
        self.goal
    }

    fn actions(&self, state: &u32) -> Vec<u8> {
        (0u8..4)
            .filter(|&dir| self.step(*state, usize::from(dir)).is_some())
            .collect()
    }

    fn result(&self, state: &u32, action: &u8) -> u32 {
        self.step(*state, usize::from(*action)).unwrap_or(*state)
    }
}

/// A named benchmark workload.
pub struct Regime {
    pub name: &'static str,
    pub problem: GridProblem,
    pub policy: SearchPolicyV1,
}

/// Open 64x64 grid; the goal is found at maximum depth.
#[must_use]
pub fn regime_open_grid() -> Regime {
    Regime {
        name: "open_grid",
        problem: GridProblem::open(64, 64),
        policy: SearchPolicyV1::default(),
    }
}

/// 64x64 grid with a quarter of the cells walled.
#[must_use]
pub fn regime_scattered_walls() -> Regime {
    Regime {
        name: "scattered_walls",
        problem: GridProblem::scattered(64, 64, 25, 7),
        policy: SearchPolicyV1::default(),
    }
}

/// Goal sealed off: the whole reachable grid is explored for nothing.
#[must_use]
pub fn regime_exhaustive_dead_end() -> Regime {
    Regime {
        name: "exhaustive_dead_end",
        problem: GridProblem::open(64, 64).with_goal_sealed(),
        policy: SearchPolicyV1::default(),
    }
}

/// Open grid cut short by the expansion budget.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    Regime {
        name: "budget_limited",
        problem: GridProblem::open(64, 64),
        policy: SearchPolicyV1 {
            max_expansions: Some(500),
            ..SearchPolicyV1::default()
        },
    }
}

/// All grid regimes.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_open_grid(),
        regime_scattered_walls(),
        regime_exhaustive_dead_end(),
        regime_budget_limited(),
    ]
}

/// Run `search()` on a prepared problem.
///
/// # Panics
///
/// Panics if `search()` rejects the policy. Benchmark policies are valid.
pub fn run_search_only<P: SearchProblemV1>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> SearchResult<P::State, P::Action> {
    search(problem, policy).expect("search should succeed in benchmarks")
}
