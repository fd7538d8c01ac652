//! Reduction from domino tiling to bipartite matching via maximum flow
//!
//! Free cells become vertices of a grid graph, a checkerboard 2-coloring
//! splits them into two parts, and a unit-capacity flow network with a
//! synthetic source and sink decides whether a perfect matching exists.
//! A tiling exists exactly when every vertex on one side can be matched.

use crate::floor::plan::FloorPlan;
use crate::graph::arena::{FlowGraph, VertexId};
use crate::graph::flow::max_flow;
use crate::io::configuration::UNIT_CAPACITY;
use ndarray::Array2;
use std::collections::VecDeque;

/// Checkerboard split of the grid vertices into two independent sets
struct Bipartition {
    part_a: Vec<VertexId>,
    part_b: Vec<VertexId>,
    /// Per-vertex color, `Some(true)` for part A
    colors: Vec<Option<bool>>,
}

/// Decide whether the floor plan can be exactly covered by 1x2 dominoes
///
/// The answer is a plain boolean: `false` covers both unequal part sizes,
/// caught before any flow computation, and a maximum flow that falls short
/// of saturating one side. A plan with no free cells at all is vacuously
/// tileable. Each call builds and owns its own graphs, so repeated calls on
/// the same input always agree.
pub fn has_tiling(floor: &str) -> bool {
    let plan = FloorPlan::parse(floor);
    let (mut graph, scan_order) = build_grid_graph(&plan);
    let split = bipartition(&graph, &scan_order);

    // A perfect matching needs equally sized parts; skip the flow entirely
    // when the counts already rule it out.
    if split.part_a.len() != split.part_b.len() {
        return false;
    }

    orient_edges(&mut graph, &split.colors);

    let source = graph.add_vertex();
    let sink = graph.add_vertex();
    for &a in &split.part_a {
        graph.set_capacity(source, a, UNIT_CAPACITY);
    }
    for &b in &split.part_b {
        graph.set_capacity(b, sink, UNIT_CAPACITY);
    }

    let matched = max_flow(&graph, source, sink);
    matched as usize == split.part_a.len()
}

/// Build the grid adjacency graph over free cells
///
/// Returns the graph plus the vertex identifiers in row-major scan order,
/// which later seeds the component coloring deterministically. Only right
/// and down neighbors are probed; `link` records both directions, and the
/// two-dimensional addressing makes row-boundary wraparound impossible.
fn build_grid_graph(plan: &FloorPlan) -> (FlowGraph, Vec<VertexId>) {
    let mut graph = FlowGraph::new();
    let mut lookup = Array2::from_elem((plan.rows(), plan.cols()), None::<VertexId>);
    let mut scan_order = Vec::new();

    for (row, col) in plan.free_cells() {
        let id = graph.add_vertex();
        if let Some(slot) = lookup.get_mut([row, col]) {
            *slot = Some(id);
        }
        scan_order.push(id);
    }

    for (row, col) in plan.free_cells() {
        let Some(&Some(here)) = lookup.get([row, col]) else {
            continue;
        };
        if let Some(&Some(right)) = lookup.get([row, col + 1]) {
            graph.link(here, right);
        }
        if let Some(&Some(down)) = lookup.get([row + 1, col]) {
            graph.link(here, down);
        }
    }

    (graph, scan_order)
}

/// Two-color the grid graph by BFS, one connected component at a time
///
/// The grid graph is bipartite by construction (right and down steps flip
/// the parity of row + column), so alternating colors along edges never
/// conflicts. Isolated rooms form separate components; the scan restarts
/// from the next uncolored vertex until everything is colored, and each
/// component's seed joins part A.
fn bipartition(graph: &FlowGraph, scan_order: &[VertexId]) -> Bipartition {
    let mut colors: Vec<Option<bool>> = vec![None; graph.vertex_count()];
    let mut part_a = Vec::new();
    let mut part_b = Vec::new();
    let mut frontier = VecDeque::new();

    for &seed in scan_order {
        if color_of(&colors, seed).is_some() {
            continue;
        }
        set_color(&mut colors, seed, true);
        part_a.push(seed);
        frontier.push_back(seed);

        while let Some(current) = frontier.pop_front() {
            let side = color_of(&colors, current).unwrap_or(true);
            for neighbor in graph.neighbors(current) {
                if color_of(&colors, neighbor).is_some() {
                    continue;
                }
                set_color(&mut colors, neighbor, !side);
                if side {
                    part_b.push(neighbor);
                } else {
                    part_a.push(neighbor);
                }
                frontier.push_back(neighbor);
            }
        }
    }

    Bipartition {
        part_a,
        part_b,
        colors,
    }
}

/// Orient every A-B adjacency as a unit-capacity edge from A to B
///
/// The reverse direction gets an explicit zero-capacity entry so the
/// residual graph can cancel flow without synthesizing edges for the grid
/// adjacencies.
fn orient_edges(graph: &mut FlowGraph, colors: &[Option<bool>]) {
    let edges: Vec<_> = graph.edges().collect();
    for (from, to) in edges {
        if color_of(colors, from) == Some(true) {
            graph.set_capacity(from, to, UNIT_CAPACITY);
            graph.set_capacity(to, from, 0);
        }
    }
}

fn color_of(colors: &[Option<bool>], vertex: VertexId) -> Option<bool> {
    colors.get(vertex.index()).copied().flatten()
}

fn set_color(colors: &mut [Option<bool>], vertex: VertexId, side: bool) {
    if let Some(slot) = colors.get_mut(vertex.index()) {
        *slot = Some(side);
    }
}
