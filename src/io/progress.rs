//! Batch progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many collages of a batch are done
///
/// Failed builds advance the bar as well and are counted separately.
pub struct ProgressManager {
    bar: ProgressBar,
    failed: usize,
}

impl ProgressManager {
    /// Progress bar for a batch of `total` collages
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, failed: 0 }
    }

    /// Progress manager that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar, failed: 0 }
    }

    /// Announce the stage of the current build
    pub fn set_stage(&self, index: usize, stage: &'static str) {
        self.bar.set_message(format!("#{index} {stage}"));
    }

    /// Mark a build as completed
    pub fn complete(&self) {
        self.bar.inc(1);
    }

    /// Mark a build as failed
    pub fn fail(&mut self) {
        self.failed += 1;
        self.bar.inc(1);
    }

    /// Builds finished so far, failed ones included
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Builds that failed so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Close the bar
    pub fn finish(&self) {
        if self.failed == 0 {
            self.bar.finish_with_message("All collages generated");
        } else {
            self.bar
                .finish_with_message(format!("{} collages failed", self.failed));
        }
    }
}
