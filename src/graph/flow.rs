//! Edmonds-Karp maximum flow on a residual copy of the network

use crate::graph::arena::{FlowGraph, VertexId};
use crate::graph::search::find_augmenting_path;

/// Compute the maximum flow from `source` to `sink`
///
/// The input graph is read-only: the engine clones it into a residual arena,
/// inserts any missing reverse edges with capacity zero so that flow already
/// sent can later be canceled, and repeatedly augments along shortest paths
/// until none remain. Every path edge moves exactly one unit per iteration,
/// which saturates unit-capacity networks in a single pass per path.
///
/// The residual arena is owned by this call and dropped before returning;
/// callers only observe the flow value. Vertex identifiers carry over to the
/// residual copy because cloning preserves arena order.
///
/// # Panics
///
/// Panics if `source` or `sink` lies outside the graph, or if any vertex
/// lists a neighbor without a declared edge weight. Both indicate a bug in
/// the caller's graph construction and are not recoverable.
pub fn max_flow(graph: &FlowGraph, source: VertexId, sink: VertexId) -> u32 {
    assert!(
        graph.contains(source) && graph.contains(sink),
        "max_flow was passed a vertex outside the graph",
    );
    graph.assert_weights_declared();

    let mut residual = graph.clone();
    for (from, to) in graph.edges() {
        if residual.capacity(to, from).is_none() {
            residual.set_capacity(to, from, 0);
        }
    }

    while let Some(path) = find_augmenting_path(&residual, source, sink) {
        for pair in path.windows(2) {
            if let &[step, next] = pair {
                residual.adjust_capacity(step, next, -1);
                residual.adjust_capacity(next, step, 1);
            }
        }
    }

    // Whatever capacity drained out of the source's edges is the total flow
    let mut total = 0;
    for neighbor in graph.neighbors(source) {
        let original = graph.capacity(source, neighbor).unwrap_or(0);
        let remaining = residual.capacity(source, neighbor).unwrap_or(0);
        total += original.saturating_sub(remaining);
    }
    total
}
