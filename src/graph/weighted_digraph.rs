//! a directed, weighted graph over arbitrary vertex values, stored as one adjacency list per vertex

use super::dijkstra::{shortest_path, ShortestPath};
use super::{Edge, Graph, GraphError, IndexT, MutableGraph, Weight};

#[derive(Clone, Debug)]
pub struct WeightedDigraph<T> {
    vertices: Vec<T>,
    adjacency: Vec<Vec<Edge>>,
}

impl<T> WeightedDigraph<T> {
    /// constructs a graph with no edges; the vertex at position i gets index i
    pub fn new(vertices: Vec<T>) -> WeightedDigraph<T> {
        let adjacency = vec![Vec::new(); vertices.len()];
        WeightedDigraph {
            vertices,
            adjacency,
        }
    }

    /// appends a vertex and returns its index. Existing indices never move.
    pub fn add_vertex(&mut self, vertex: T) -> IndexT {
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        (self.vertices.len() - 1) as IndexT
    }

    pub fn vertex(&self, index: IndexT) -> Result<&T, GraphError> {
        self.check_index(index)?;
        Ok(&self.vertices[index as usize])
    }

    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// total number of arcs, parallel ones included
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// weight of the first arc from `source` to `target`, in insertion order
    pub fn edge_weight(&self, source: IndexT, target: IndexT) -> Result<Option<Weight>, GraphError> {
        self.check_index(source)?;
        self.check_index(target)?;
        Ok(self.adjacency[source as usize]
            .iter()
            .find(|edge| edge.to == target)
            .map(|edge| edge.weight))
    }

    /// Computes the cheapest route between two vertices.
    ///
    /// Fails with `TargetUnreachable` when no directed path exists. A query from a
    /// vertex to itself yields length 0 and the single-vertex path.
    pub fn shortest_path(&self, source: IndexT, target: IndexT) -> Result<ShortestPath, GraphError> {
        shortest_path(self, source, target)
    }

    fn check_index(&self, index: IndexT) -> Result<(), GraphError> {
        if (index as usize) < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                size: self.vertices.len(),
            })
        }
    }
}

impl<T: PartialEq> WeightedDigraph<T> {
    /// index of the first vertex equal to `value`, by linear scan
    pub fn vertex_index(&self, value: &T) -> Option<IndexT> {
        self.vertices
            .iter()
            .position(|vertex| vertex == value)
            .map(|i| i as IndexT)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.vertex_index(value).is_some()
    }
}

impl<T> Graph for WeightedDigraph<T> {
    fn size(&self) -> usize {
        self.vertices.len()
    }

    /// # Panics
    ///
    /// Panics if `i` is not a vertex index; `edge_weight` and `vertex` are the checked
    /// accessors.
    fn neighbors(&self, i: IndexT) -> &[Edge] {
        assert!((i as usize) < self.vertices.len());
        &self.adjacency[i as usize]
    }
}

impl<T> MutableGraph for WeightedDigraph<T> {
    /// Appends an arc without checking for an existing one between the same pair.
    fn add_edge(&mut self, from: IndexT, to: IndexT, weight: Weight) -> Result<(), GraphError> {
        if weight < 0 {
            return Err(GraphError::InvalidWeight { weight });
        }
        self.check_index(from)?;
        self.check_index(to)?;
        self.adjacency[from as usize].push(Edge { to, weight });
        Ok(())
    }

    /// Removes only the first matching arc and returns its weight; `None` if there was none.
    fn remove_edge(&mut self, from: IndexT, to: IndexT) -> Result<Option<Weight>, GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let edges = &mut self.adjacency[from as usize];
        Ok(edges
            .iter()
            .position(|edge| edge.to == to)
            .map(|position| edges.remove(position).weight))
    }
}
