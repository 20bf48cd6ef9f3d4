//! FIFO frontier and explored set.
//!
//! The frontier keeps discovery order in a `VecDeque` and a `HashSet` index of
//! the states currently queued, so "is this state already waiting?" is O(1)
//! while dequeue order stays strictly first-in, first-out.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::node::NodeId;

/// Breadth-first frontier.
///
/// Invariant: no two queued entries share a state.
#[derive(Debug)]
pub struct FifoFrontier<S> {
    queue: VecDeque<(NodeId, S)>,
    queued: HashSet<S>,
    high_water: u64,
}

impl<S: Clone + Eq + Hash> FifoFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            high_water: 0,
        }
    }

    /// Append a node at the back.
    ///
    /// Returns `false` (and leaves the frontier unchanged) if a node with the
    /// same state is already queued.
    pub fn push(&mut self, id: NodeId, state: &S) -> bool {
        if !self.queued.insert(state.clone()) {
            return false;
        }
        self.queue.push_back((id, state.clone()));
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Remove the oldest node.
    pub fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.queue.pop_front()?;
        self.queued.remove(&state);
        Some(id)
    }

    /// Whether a node with `state` is waiting in the queue.
    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.queued.contains(state)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// States already dequeued and expanded. Grows monotonically.
#[derive(Debug)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    /// Create a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Record `state` as explored. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Whether `state` has been explored.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Number of explored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been explored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
