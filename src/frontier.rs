//! Frontiers of discovered but not yet expanded search nodes.
//!
//! Both variants share one interface and differ only in which node
//! [`Frontier::remove`] hands back. Only the queue guarantees shortest paths
//! on an unweighted graph.

use std::collections::VecDeque;

use thiserror::Error;

use crate::graph_store::PersonId;
use crate::node::Node;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    #[error("frontier is empty")]
    Empty,
}

pub trait Frontier {
    fn add(&mut self, node: Node);

    /// Linear scan for a node with the given state. Callers check this
    /// before `add`; the frontier itself stores duplicates.
    fn contains_state(&self, state: &PersonId) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn remove(&mut self) -> Result<Node, FrontierError>;
}

/// Last in, first out. Explores depth-first.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Node>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn remove(&mut self) -> Result<Node, FrontierError> {
        self.nodes.pop().ok_or(FrontierError::Empty)
    }
}

/// First in, first out. Explores breadth-first.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Node>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.nodes.iter().any(|node| &node.state == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn remove(&mut self) -> Result<Node, FrontierError> {
        self.nodes.pop_front().ok_or(FrontierError::Empty)
    }
}
