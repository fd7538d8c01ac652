//! Floor plan format constants and runtime configuration defaults

// Floor plan text format
/// Character marking a tileable cell in floor plan text
pub const FREE_CELL: char = ' ';

/// File extension recognized when scanning a directory for floor plans
pub const FLOOR_EXTENSION: &str = "txt";

// Flow network construction
/// Capacity assigned to every matching and source/sink edge
///
/// The reduction never needs more: each cell hosts at most one domino half.
pub const UNIT_CAPACITY: u32 = 1;

// Safety limit to keep accidental huge inputs from exhausting memory
/// Maximum accepted floor plan dimension in cells
pub const MAX_FLOOR_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Minimum number of files before a batch progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
