//! Ferry Search: breadth-first graph search with an auditable expansion log.
//!
//! This crate provides the search layer. It depends only on `ferry_kernel`;
//! it does NOT depend on `ferry_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ferry_kernel  ←  ferry_search  ←  ferry_harness
//! (carriers,       (frontier,        (puzzle, rendering,
//!  hashing)         nodes, BFS)       runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblemV1`](contract::SearchProblemV1) -- trait a problem implements
//! - [`NodeArenaV1`](node::NodeArenaV1) -- per-search owner of every node
//! - [`FifoFrontier`](frontier::FifoFrontier) -- FIFO queue with a state index
//! - [`SearchPolicyV1`](policy::SearchPolicyV1) -- optional budgets
//! - [`SearchGraphV1`](graph::SearchGraphV1) -- expansion-event audit log
//! - [`breadth_first_search`](search::breadth_first_search) /
//!   [`search`](search::search) -- entry points

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod search;
