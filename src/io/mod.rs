//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Floor plan format constants and runtime configuration defaults
pub mod configuration;
/// Error types for floor plan loading and batch processing
pub mod error;
/// Batch progress display for multi-file runs
pub mod progress;
