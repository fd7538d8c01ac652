//! Shortest augmenting-path search over positive-capacity edges

use crate::graph::arena::{FlowGraph, VertexId};
use bitvec::prelude::*;
use std::collections::VecDeque;

/// Find a shortest augmenting path from `source` to `sink`
///
/// Runs a breadth-first search restricted to edges with strictly positive
/// capacity, so the returned path has the fewest edges among all usable
/// paths; the Edmonds-Karp polynomial bound depends on exactly this choice
/// of path. Returns `None` when the frontier empties before reaching the
/// sink.
///
/// On success the path is in traversal order, source first and sink last.
/// The graph is never modified; visited set, predecessor map, and queue are
/// local to the call.
///
/// # Panics
///
/// Panics if `source` or `sink` lies outside the graph, or if any vertex
/// lists a neighbor without a declared edge weight. Both indicate a bug in
/// the caller's graph construction and are not recoverable.
pub fn find_augmenting_path(
    graph: &FlowGraph,
    source: VertexId,
    sink: VertexId,
) -> Option<Vec<VertexId>> {
    assert!(
        graph.contains(source) && graph.contains(sink),
        "find_augmenting_path was passed a vertex outside the graph",
    );
    graph.assert_weights_declared();

    let mut reached = bitvec![0; graph.vertex_count()];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut frontier = VecDeque::new();

    reached.set(source.index(), true);
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        for neighbor in graph.neighbors(current) {
            // Saturated edges are absent from the residual sense of the graph
            if graph.capacity(current, neighbor).unwrap_or(0) == 0 {
                continue;
            }
            if reached.get(neighbor.index()).as_deref() == Some(&true) {
                continue;
            }
            reached.set(neighbor.index(), true);
            if let Some(slot) = predecessor.get_mut(neighbor.index()) {
                *slot = Some(current);
            }
            frontier.push_back(neighbor);
        }
    }

    if reached.get(sink.index()).as_deref() != Some(&true) {
        return None;
    }

    // Walk predecessor links back from the sink, then flip into path order
    let mut path = vec![sink];
    let mut current = sink;
    while current != source {
        let Some(previous) = predecessor.get(current.index()).copied().flatten() else {
            unreachable!("BFS reached {current} without recording a predecessor")
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Some(path)
}
