//! Shared helpers for the lock tests and fixture binaries.

#![forbid(unsafe_code)]

pub mod graph_problem;
