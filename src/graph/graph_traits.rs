//! Traits for weighted graph interfaces

use super::GraphError;

pub type IndexT = u32;
pub type Weight = i64;

/// an outgoing arc, stored in the adjacency list of its source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: IndexT,
    pub weight: Weight,
}

pub trait Graph {
    fn size(&self) -> usize;

    /// outgoing arcs of `i`, in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below `size()`.
    fn neighbors(&self, i: IndexT) -> &[Edge];
}

pub trait MutableGraph {
    fn add_edge(&mut self, from: IndexT, to: IndexT, weight: Weight) -> Result<(), GraphError>;
    fn remove_edge(&mut self, from: IndexT, to: IndexT) -> Result<Option<Weight>, GraphError>;
}
