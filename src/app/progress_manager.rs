//! Progress UI (bar) for download runs.

use std::time::Duration;

use fusker_core::DownloadOutcome;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar advanced once per settled download.
///
/// Hidden when the terminal should not show progress, so callers can drive
/// it unconditionally.
pub(crate) struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    pub(crate) fn new(use_progress_bar: bool, total: usize) -> Self {
        if !use_progress_bar {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{pos}/{len}] {wide_bar} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Records one settled item.
    pub(crate) fn record(&self, outcome: &DownloadOutcome) {
        self.bar.set_message(outcome.url().to_string());
        self.bar.inc(1);
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> u64 {
        self.bar.position()
    }

    pub(crate) fn finish(self) {
        self.bar.finish_and_clear();
    }
}
