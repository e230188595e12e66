//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use collagen::io::progress::ProgressManager;

    // Tests completed and failed builds both advance the bar
    // Verified by not advancing on failure
    #[test]
    fn test_progress_counts() {
        let mut pm = ProgressManager::hidden(3);

        pm.set_stage(0, "arranging images");
        pm.complete();
        pm.set_stage(1, "rendering");
        pm.fail();
        pm.complete();

        assert_eq!(pm.position(), 3);
        assert_eq!(pm.failed(), 1);
        pm.finish();
    }

    // Tests a visible manager can run an empty batch
    // Verified by dividing by the batch length
    #[test]
    fn test_progress_empty_batch() {
        let pm = ProgressManager::new(0);
        assert_eq!(pm.position(), 0);
        assert_eq!(pm.failed(), 0);
        pm.finish();
    }
}
