//! Domino tiling feasibility for ASCII floor plans
//!
//! Decides whether a rectangular floor plan of free cells and obstacles can be
//! fully covered by non-overlapping 1x2 dominoes. The question reduces to
//! perfect matching in the checkerboard-colored grid graph, which is answered
//! with an Edmonds-Karp maximum-flow computation over a unit-capacity network.

#![forbid(unsafe_code)]

/// Floor plan parsing and the tiling decision built on the flow engine
pub mod floor;
/// Flow network arena, augmenting-path search, and the Edmonds-Karp engine
pub mod graph;
/// Input/output operations and error handling
pub mod io;

pub use floor::has_tiling;
pub use io::error::{Result, TilingError};
