//! Batch progress display for multi-file tiling checks

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar shown while checking a batch of floor plan files
///
/// Individual checks finish in well under a frame, so there is no per-file
/// progress; a single bar tracks the batch and names the file most recently
/// completed.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the number of files in the batch
    pub fn new(file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] Floors: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Record one completed file, displaying its name next to the bar
    pub fn file_done(&self, name: &str) {
        self.bar.set_message(name.to_owned());
        self.bar.inc(1);
    }

    /// Remove the bar once the batch completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
