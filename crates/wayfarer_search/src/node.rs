use std::ops::Index;

use serde::Serialize;

/// Index of a [`Node`] inside the [`SearchTree`] of one search run.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

/// A record of the search tree: how a state was reached and at which cost.
///
/// Nodes are never mutated once created. A cheaper path to the same state
/// produces a new node, the old one simply stops being referenced by the
/// reached map.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    id: NodeId,
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    path_cost: f64,
    depth: usize,
}

impl<S, A> Node<S, A> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena owning every node created during one search run.
///
/// Parents are referenced by index so walking a path back to the root never
/// recurses, however long the path is.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> SearchTree<S, A>
where
    S: Clone,
    A: Clone,
{
    pub fn with_root(state: S) -> (Self, NodeId) {
        let root = Node {
            id: NodeId::new(0),
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        };

        (SearchTree { nodes: vec![root] }, NodeId::new(0))
    }

    /// Appends the node reached from `parent` by `action`, charging
    /// `step_cost` on top of the parent's path cost.
    pub fn add_child(&mut self, parent: NodeId, action: A, state: S, step_cost: f64) -> NodeId {
        let parent_node = &self.nodes[parent.get()];
        let id = NodeId::new(self.nodes.len());
        let child = Node {
            id,
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost: parent_node.path_cost + step_cost,
            depth: parent_node.depth + 1,
        };
        self.nodes.push(child);
        id
    }

    pub fn root(&self) -> &Node<S, A> {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<S, A>> {
        self.nodes.get(id.get())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks from `id` up to the root, `id` included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S, A> {
        Ancestors {
            tree: self,
            next: self.node(id).map(|node| node.id),
        }
    }

    /// States from the root to `id`, both included.
    pub fn path_states(&self, id: NodeId) -> Vec<S> {
        let mut states: Vec<S> = self
            .ancestors(id)
            .map(|node| node.state.clone())
            .collect();
        states.reverse();
        states
    }

    /// Actions taken from the root to reach `id`. The root contributes none.
    pub fn path_actions(&self, id: NodeId) -> Vec<A> {
        let mut actions: Vec<A> = self
            .ancestors(id)
            .filter_map(|node| node.action.clone())
            .collect();
        actions.reverse();
        actions
    }
}

impl<S, A> Index<NodeId> for SearchTree<S, A> {
    type Output = Node<S, A>;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

pub struct Ancestors<'a, S, A> {
    tree: &'a SearchTree<S, A>,
    next: Option<NodeId>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a Node<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.tree.nodes[self.next?.get()];
        self.next = node.parent;
        Some(node)
    }
}
