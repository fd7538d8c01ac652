//! Flow network representation and maximum-flow computation
//!
//! This module contains the graph layer of the tiling checker:
//! - Arena-backed vertex and capacity storage
//! - Shortest augmenting-path search
//! - The Edmonds-Karp maximum-flow engine

/// Arena-backed vertex storage with adjacency and edge capacities
pub mod arena;
/// Edmonds-Karp maximum flow over a residual copy of the network
pub mod flow;
/// Breadth-first search for shortest augmenting paths
pub mod search;

pub use arena::{FlowGraph, VertexId};
pub use flow::max_flow;
pub use search::find_augmenting_path;
