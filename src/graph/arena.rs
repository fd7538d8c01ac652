use std::collections::{HashMap, HashSet};
use std::fmt;

/// Stable handle to a vertex in a [`FlowGraph`] arena
///
/// Identifiers are plain positions in the owning arena, so they stay valid
/// across clones of the graph and are only meaningful for arenas of the same
/// shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in its arena
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Adjacency and edge weights for a single vertex
///
/// The neighbor set and the weight map are kept separate because the tiling
/// reducer discovers adjacency before it knows which direction carries
/// capacity; `assert_weights_declared` closes the gap before any flow runs.
#[derive(Clone, Debug, Default)]
struct VertexData {
    neighbors: HashSet<VertexId>,
    weights: HashMap<VertexId, u32>,
}

/// Directed graph with integer edge capacities, backed by an index arena
///
/// All vertices live in one vector addressed by [`VertexId`]. Dropping the
/// graph releases every vertex at once, so a residual copy made with
/// `clone()` needs no manual cleanup when the flow computation finishes.
#[derive(Clone, Debug, Default)]
pub struct FlowGraph {
    vertices: Vec<VertexData>,
}

impl FlowGraph {
    /// Create an empty graph
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Allocate a fresh vertex with no incident edges
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(VertexData::default());
        id
    }

    /// Number of vertices in the arena
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether `vertex` addresses a slot in this arena
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.0 < self.vertices.len()
    }

    /// Iterate over every vertex identifier in the arena
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Record mutual adjacency between `a` and `b` without declaring weights
    ///
    /// Grid adjacency is discovered before the bipartition fixes edge
    /// directions, so linked vertices carry no capacity yet. Callers must
    /// declare a weight for both directions before running any flow
    /// computation.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside the arena.
    pub fn link(&mut self, a: VertexId, b: VertexId) {
        assert!(
            self.contains(a) && self.contains(b),
            "link was passed a vertex outside the arena",
        );
        if let Some(data) = self.vertices.get_mut(a.index()) {
            data.neighbors.insert(b);
        }
        if let Some(data) = self.vertices.get_mut(b.index()) {
            data.neighbors.insert(a);
        }
    }

    /// Declare a directed edge `from -> to` with the given capacity
    ///
    /// The adjacency entry is inserted if it is not already present, so edges
    /// created this way always satisfy the neighbor/weight invariant.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside the arena.
    pub fn set_capacity(&mut self, from: VertexId, to: VertexId, capacity: u32) {
        assert!(
            self.contains(from) && self.contains(to),
            "set_capacity was passed a vertex outside the arena",
        );
        if let Some(data) = self.vertices.get_mut(from.index()) {
            data.neighbors.insert(to);
            data.weights.insert(to, capacity);
        }
    }

    /// Capacity of the directed edge `from -> to`, if one is declared
    pub fn capacity(&self, from: VertexId, to: VertexId) -> Option<u32> {
        self.vertices
            .get(from.index())
            .and_then(|data| data.weights.get(&to).copied())
    }

    /// Iterate over the neighbors of `vertex` in arbitrary order
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(vertex.index())
            .into_iter()
            .flat_map(|data| data.neighbors.iter().copied())
    }

    /// Iterate over every directed edge `(from, to)` in the graph
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(|(index, data)| data.neighbors.iter().map(move |&to| (VertexId(index), to)))
    }

    /// Apply a signed adjustment to the capacity of a declared edge
    ///
    /// Used by the flow engine to move one unit of flow across a residual
    /// edge pair. Touching an undeclared edge, or driving a capacity below
    /// zero, is a contract violation and aborts.
    pub(crate) fn adjust_capacity(&mut self, from: VertexId, to: VertexId, delta: i32) {
        assert!(
            self.capacity(from, to).is_some(),
            "adjust_capacity touched an undeclared edge {from} -> {to}",
        );
        if let Some(weight) = self
            .vertices
            .get_mut(from.index())
            .and_then(|data| data.weights.get_mut(&to))
        {
            let adjusted = i64::from(*weight) + i64::from(delta);
            assert!(
                adjusted >= 0,
                "capacity of edge {from} -> {to} would become negative",
            );
            *weight = adjusted as u32;
        }
    }

    /// Verify that every listed neighbor has a declared edge weight
    ///
    /// Flow computations run this eagerly before touching the graph. A
    /// violation means the caller linked vertices and never assigned
    /// capacities, which is a construction bug rather than a recoverable
    /// runtime condition.
    ///
    /// # Panics
    ///
    /// Panics if any vertex lists a neighbor without a matching weight entry.
    pub fn assert_weights_declared(&self) {
        for (index, data) in self.vertices.iter().enumerate() {
            for neighbor in &data.neighbors {
                assert!(
                    data.weights.contains_key(neighbor),
                    "vertex v{index} lists neighbor {neighbor} without a declared weight",
                );
            }
        }
    }
}
