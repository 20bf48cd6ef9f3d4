//! Ferry Harness: concrete problems and run orchestration for the search.
//!
//! The harness wires a problem to `ferry_search`, resolves the run policy,
//! renders solutions for people, and packages the outcome as a digestible
//! report.
//!
//! The harness does NOT implement search logic; it delegates to the search
//! crate. Worlds provide problem data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod policy;
pub mod render;
pub mod runner;
pub mod worlds;
