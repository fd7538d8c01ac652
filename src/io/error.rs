//! Error types for floor plan loading and batch processing
//!
//! Only boundary I/O is recoverable. An infeasible tiling is a normal
//! `false` answer, and malformed graph construction aborts outright, so
//! neither appears here.

use std::fmt;
use std::path::PathBuf;

/// Main error type for floor plan processing
#[derive(Debug)]
pub enum TilingError {
    /// Failed to read a floor plan from the filesystem
    FloorRead {
        /// Path to the floor plan file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Target path is neither a floor plan file nor a directory
    InvalidTarget {
        /// Path supplied on the command line
        path: PathBuf,
        /// Explanation of why the target was rejected
        reason: &'static str,
    },

    /// Floor plan exceeds the configured safety bounds
    FloorTooLarge {
        /// Path to the oversized floor plan
        path: PathBuf,
        /// Largest measured dimension in cells
        dimension: usize,
        /// Maximum dimension accepted
        limit: usize,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloorRead { path, source } => {
                write!(f, "Failed to read floor plan '{}': {source}", path.display())
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::FloorTooLarge {
                path,
                dimension,
                limit,
            } => {
                write!(
                    f,
                    "Floor plan '{}' spans {dimension} cells (limit: {limit})",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FloorRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FloorRead {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Convenience type alias for processing results
pub type Result<T> = std::result::Result<T, TilingError>;
