//! Frontiers of unexplored search nodes.
//!
//! `QueueFrontier` hands nodes back in insertion order, which is what keeps
//! the search breadth-first and its first hit shortest. `StackFrontier`
//! hands back the newest node and turns the same search depth-first.

use std::collections::VecDeque;

use crate::dataset::{MovieId, PersonId};

/// One step of exploration. `parent` indexes the explored arena; roots
/// (direct co-stars of the source) have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: PersonId,
    pub action: MovieId,
    pub parent: Option<usize>,
}

pub trait Frontier {
    fn add(&mut self, node: Node);
    fn remove(&mut self) -> Option<Node>;
    fn is_empty(&self) -> bool;
}

impl<F: Frontier + ?Sized> Frontier for &mut F {
    fn add(&mut self, node: Node) {
        (**self).add(node);
    }

    fn remove(&mut self) -> Option<Node> {
        (**self).remove()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

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

    fn remove(&mut self) -> Option<Node> {
        self.nodes.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

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

    fn remove(&mut self) -> Option<Node> {
        self.nodes.pop()
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
