//! Weighted digraph implementation and shortest path search

pub mod dijkstra;

#[cfg(test)]
mod tests;

mod error;
mod graph_traits;
mod weighted_digraph;

pub use dijkstra::ShortestPath;
pub use error::GraphError;
pub use graph_traits::*;
pub use weighted_digraph::*;
