//! Search nodes and the per-search node arena.
//!
//! Nodes never point at each other directly: a node stores the [`NodeId`] of
//! its parent, and the arena owns every node created during one search.
//! Dropping the arena releases the whole tree at once.

use crate::contract::SearchProblemV1;

/// Index of a node inside its [`NodeArenaV1`].
///
/// Ids are dense and assigned in creation order, so the root is always
/// `NodeId::ROOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every search tree.
    pub const ROOT: Self = Self(0);

    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Id as recorded in the search graph.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

/// A node of the search tree.
///
/// The root has no parent and no producing action; every other node has both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNodeV1<S, A> {
    /// State represented by this node.
    pub state: S,
    /// Action that produced this node from its parent (`None` for the root).
    pub action: Option<A>,
    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,
    /// Tree depth (root = 0).
    pub depth: u32,
}

impl<S, A> SearchNodeV1<S, A> {
    /// A root node for `state`.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
            parent: None,
            depth: 0,
        }
    }

    /// Whether this node is a tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owner of every node built during one search.
#[derive(Debug)]
pub struct NodeArenaV1<S, A> {
    nodes: Vec<SearchNodeV1<S, A>>,
}

impl<S: Clone, A: Clone> NodeArenaV1<S, A> {
    /// An arena holding only the root for `state`.
    #[must_use]
    pub fn with_root(state: S) -> Self {
        Self {
            nodes: vec![SearchNodeV1::root(state)],
        }
    }

    /// Take ownership of `node`, returning its id.
    ///
    /// `node.parent`, if set, must name a node already in this arena; that is
    /// what keeps the structure a tree.
    pub fn push(&mut self, node: SearchNodeV1<S, A>) -> NodeId {
        debug_assert!(node.parent.is_none_or(|p| p.index() < self.nodes.len()));
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNodeV1<S, A> {
        &self.nodes[id.index()]
    }

    /// Number of nodes created so far (root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: an arena starts with its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `(id, node)` in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNodeV1<S, A>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// One child per action of `problem.actions(node.state)`, in that order.
    ///
    /// Children are not inserted; the caller decides which ones to keep.
    pub fn expand<P>(&self, id: NodeId, problem: &P) -> Vec<SearchNodeV1<S, A>>
    where
        P: SearchProblemV1<State = S, Action = A> + ?Sized,
    {
        let parent = self.get(id);
        problem
            .actions(&parent.state)
            .into_iter()
            .map(|action| SearchNodeV1 {
                state: problem.result(&parent.state, &action),
                action: Some(action),
                parent: Some(id),
                depth: parent.depth + 1,
            })
            .collect()
    }

    /// Actions from the root to `id`, root-to-leaf order.
    ///
    /// The root contributes nothing, so the root's own solution is empty.
    #[must_use]
    pub fn solution(&self, id: NodeId) -> Vec<A> {
        let mut actions: Vec<A> = self
            .ancestry(id)
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }

    /// Actions from the root to a detached child of `parent`, ending with `last`.
    #[must_use]
    pub fn solution_through(&self, parent: NodeId, last: &A) -> Vec<A> {
        let mut actions = self.solution(parent);
        actions.push(last.clone());
        actions
    }

    /// States from the root to `id` inclusive.
    #[must_use]
    pub fn path_states(&self, id: NodeId) -> Vec<S> {
        let mut states: Vec<S> = self.ancestry(id).map(|node| node.state.clone()).collect();
        states.reverse();
        states
    }

    /// Node ids from the root to `id` inclusive.
    #[must_use]
    pub fn path_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            ids.push(cur);
            current = self.get(cur).parent;
        }
        ids.reverse();
        ids
    }

    /// Walk from `id` up to the root.
    fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNodeV1<S, A>> {
        let mut current = Some(id);
        std::iter::from_fn(move || {
            let node = self.get(current?);
            current = node.parent;
            Some(node)
        })
    }
}
