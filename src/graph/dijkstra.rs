//! Single-pair shortest paths over a generic weighted graph

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Graph, GraphError, IndexT, Weight};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    pub length: Weight,
    /// vertex indices from source to target, both included
    pub nodes: Vec<IndexT>,
}

impl ShortestPath {
    pub fn source(&self) -> Option<IndexT> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<IndexT> {
        self.nodes.last().copied()
    }
}

/// A tentative distance discovered for `vertex` through `predecessor`.
/// Entries are never updated in place; outdated ones are dropped when popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    distance: Weight,
    vertex: IndexT,
    predecessor: Option<IndexT>,
}

/// Dijkstra's algorithm with lazy deletion: the heap may hold several entries for the same
/// vertex and only the first one popped for it counts. Stops as soon as `target` is finalized.
///
/// Edge weights are assumed non-negative. Fails with `IndexOutOfRange` for an index outside
/// `graph`. When the target is not reached and some arc was skipped because the route
/// through it could not be represented, the error is `LengthOverflow`, not `TargetUnreachable`.
pub fn shortest_path(
    graph: &dyn Graph,
    source: IndexT,
    target: IndexT,
) -> Result<ShortestPath, GraphError> {
    let n = graph.size();
    for index in [source, target] {
        if index as usize >= n {
            return Err(GraphError::IndexOutOfRange { index, size: n });
        }
    }

    // `None` until a vertex is first reached
    let mut distances: Vec<Option<Weight>> = vec![None; n];
    let mut visited: Vec<bool> = vec![false; n];
    // filled when a vertex is finalized, so it only ever holds settled links
    let mut predecessors: Vec<Option<IndexT>> = vec![None; n];

    let mut queue: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    let mut overflowed = false;
    distances[source as usize] = Some(0);
    queue.push(Reverse(QueueEntry {
        distance: 0,
        vertex: source,
        predecessor: None,
    }));

    while let Some(Reverse(current)) = queue.pop() {
        let vertex = current.vertex as usize;
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        predecessors[vertex] = current.predecessor;

        if current.vertex == target {
            return Ok(ShortestPath {
                length: current.distance,
                nodes: walk_back(&predecessors, target),
            });
        }

        for edge in graph.neighbors(current.vertex) {
            let next = edge.to as usize;
            if visited[next] {
                continue;
            }
            let Some(candidate) = current.distance.checked_add(edge.weight) else {
                overflowed = true;
                continue;
            };
            if distances[next].map_or(true, |best| candidate < best) {
                distances[next] = Some(candidate);
                queue.push(Reverse(QueueEntry {
                    distance: candidate,
                    vertex: edge.to,
                    predecessor: Some(current.vertex),
                }));
            }
        }
    }

    if overflowed {
        return Err(GraphError::LengthOverflow {
            from: source,
            to: target,
        });
    }
    Err(GraphError::TargetUnreachable {
        from: source,
        to: target,
    })
}

/// follows predecessor links from `target` back to the vertex that has none
fn walk_back(predecessors: &[Option<IndexT>], target: IndexT) -> Vec<IndexT> {
    let mut nodes = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current as usize] {
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();
    nodes
}
