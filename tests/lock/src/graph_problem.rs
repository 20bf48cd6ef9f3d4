//! `GraphProblem`: a search problem over an explicit directed graph.
//!
//! States are node numbers and the action for an edge is its destination, so
//! a solution is the list of nodes visited after the start. Every call to
//! `actions` is recorded, which lets tests observe what the search expanded.

use std::cell::RefCell;

use ferry_search::contract::SearchProblemV1;

/// Directed graph with a start node and a goal node.
#[derive(Debug)]
pub struct GraphProblem {
    edges: Vec<Vec<u16>>,
    start: u16,
    goal: u16,
    expanded: RefCell<Vec<u16>>,
}

impl GraphProblem {
    /// Graph from adjacency lists; `edges[n]` are the successors of `n` in
    /// enumeration order.
    #[must_use]
    pub fn new(edges: Vec<Vec<u16>>, start: u16, goal: u16) -> Self {
        Self {
            edges,
            start,
            goal,
            expanded: RefCell::new(Vec::new()),
        }
    }

    /// Graph on `node_count` nodes from an edge list. Edges keep their list
    /// order within each source; edges touching nodes out of range are dropped.
    #[must_use]
    pub fn from_edges(node_count: u16, edge_list: &[(u16, u16)], start: u16, goal: u16) -> Self {
        let mut edges = vec![Vec::new(); usize::from(node_count)];
        for &(from, to) in edge_list {
            if from < node_count && to < node_count {
                edges[usize::from(from)].push(to);
            }
        }
        Self::new(edges, start, goal)
    }

    /// States `actions` was called on, in call order.
    #[must_use]
    pub fn expanded_states(&self) -> Vec<u16> {
        self.expanded.borrow().clone()
    }

    /// Number of `actions` calls so far.
    #[must_use]
    pub fn actions_calls(&self) -> usize {
        self.expanded.borrow().len()
    }

    fn successors(&self, node: u16) -> &[u16] {
        self.edges.get(usize::from(node)).map_or(&[] as &[u16], Vec::as_slice)
    }

    /// Whether `actions` walks from the start to the goal along graph edges.
    #[must_use]
    pub fn is_solution(&self, actions: &[u16]) -> bool {
        let mut at = self.start;
        for &next in actions {
            if !self.successors(at).contains(&next) {
                return false;
            }
            at = next;
        }
        at == self.goal
    }

    /// Shortest start-to-goal edge count by exhaustive enumeration of simple
    /// paths. `Some(0)` when start is the goal, `None` when unreachable.
    #[must_use]
    pub fn brute_force_distance(&self) -> Option<usize> {
        let mut on_path = vec![false; self.edges.len().max(usize::from(self.start) + 1)];
        let mut best = None;
        self.walk(self.start, 0, &mut on_path, &mut best);
        best
    }

    fn walk(&self, node: u16, depth: usize, on_path: &mut [bool], best: &mut Option<usize>) {
        if node == self.goal {
            *best = Some(best.map_or(depth, |b: usize| b.min(depth)));
            return;
        }
        on_path[usize::from(node)] = true;
        for &next in self.successors(node) {
            if !on_path[usize::from(next)] {
                self.walk(next, depth + 1, on_path, best);
            }
        }
        on_path[usize::from(node)] = false;
    }
}

impl SearchProblemV1 for GraphProblem {
    type State = u16;
    type Action = u16;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "graph_problem"
    }

    fn initial_state(&self) -> u16 {
        self.start
    }

    fn goal_state(&self) -> u16 {
        self.goal
    }

    fn actions(&self, state: &u16) -> Vec<u16> {
        self.expanded.borrow_mut().push(*state);
        self.successors(*state).to_vec()
    }

    fn result(&self, _state: &u16, action: &u16) -> u16 {
        *action
    }
}
