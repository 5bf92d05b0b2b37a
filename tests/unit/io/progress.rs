//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use remex::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a single file gets no progress bar
    // Verified by always creating a bar
    #[test]
    fn test_single_file_has_no_bar() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        assert!(!manager.is_visible());

        manager.start_file(Path::new("chipset.png"));
        manager.complete_file();
        manager.finish();
        assert_eq!(manager.completed(), 1);
    }

    // Tests batches count completed files
    // Verified by skipping the increment in complete_file
    #[test]
    fn test_batch_counts_files() {
        let mut manager = ProgressManager::new();
        manager.initialize(4);
        assert!(manager.is_visible());

        for name in ["a.png", "b.png", "c.png"] {
            manager.start_file(Path::new(name));
            manager.complete_file();
        }
        assert_eq!(manager.completed(), 3);
        manager.finish();
    }

    // Tests re-initializing resets the count
    // Verified by keeping the previous count
    #[test]
    fn test_initialize_resets() {
        let mut manager = ProgressManager::default();
        manager.initialize(2);
        manager.complete_file();
        manager.initialize(2);
        assert_eq!(manager.completed(), 0);
    }
}
