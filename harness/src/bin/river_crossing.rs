//! Solve the wolf, goat and cabbage puzzle and print the crossings.
//!
//! Usage: `river_crossing`
//!
//! Budgets come from `FERRY_MAX_EXPANSIONS` / `FERRY_MAX_DEPTH`; log level
//! from `RUST_LOG` (default `warn`, written to stderr). Prints one line per
//! crossing, or nothing if no solution was found, and exits 0. Exits 1 if the
//! configuration is invalid.

use std::process::ExitCode;

use ferry_harness::policy::PolicyConfig;
use ferry_harness::runner::{run_search, RunError};
use ferry_harness::worlds::river_crossing::RiverCrossingProblem;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("river_crossing: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Vec<&'static str>, RunError> {
    let config = PolicyConfig::from_env()?;
    let report = run_search(&RiverCrossingProblem::classic(), &config)?;
    Ok(report.lines)
}
