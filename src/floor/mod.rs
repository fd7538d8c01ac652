//! Floor plans and the domino tiling decision
//!
//! This module contains the tiling side of the checker:
//! - Floor plan parsing from row-separated text
//! - The reduction from domino tiling to bipartite matching

/// Reduction from domino tiling to a unit-capacity flow problem
pub mod matching;
/// Floor plan parsing and cell access
pub mod plan;

pub use matching::has_tiling;
pub use plan::{Cell, FloorPlan};
