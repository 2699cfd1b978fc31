//! Search nodes and the arena that owns expanded ones.
//!
//! A node points at its parent by arena index instead of by reference, so the
//! whole search tree is one `Vec` that is dropped when the search returns.

use crate::graph_store::{MovieId, PersonId};

/// Position of an expanded node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Person this node stands for.
    pub state: PersonId,
    /// Expanded node that discovered this one; `None` for the root.
    pub parent: Option<NodeId>,
    /// Movie linking the parent's person to `state`; `None` for the root.
    pub action: Option<MovieId>,
}

impl Node {
    pub fn root(state: PersonId) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    pub fn child(state: PersonId, parent: NodeId, action: MovieId) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(action, state)` pairs from the root down to `id`, root excluded.
    pub fn trail(&self, id: NodeId) -> Vec<(MovieId, PersonId)> {
        let mut hops = Vec::new();
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            let (Some(parent), Some(action)) = (node.parent, &node.action) else {
                break; // reached the root
            };
            hops.push((action.clone(), node.state.clone()));
            cursor = self.get(parent);
        }
        hops.reverse();
        hops
    }
}
