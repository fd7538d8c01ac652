//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use flowtile::io::progress::ProgressManager;

    // Progress output is cosmetic; these exercise the lifecycle for panics
    #[test]
    fn test_progress_lifecycle_completes() {
        let progress = ProgressManager::new(3);
        for name in ["a.txt", "b.txt", "c.txt"] {
            progress.file_done(name);
        }
        progress.finish();
    }

    #[test]
    fn test_empty_batch_finishes_cleanly() {
        let progress = ProgressManager::new(0);
        progress.finish();
    }
}
