//! Sequential batch downloads with per-item failure isolation.
//!
//! The pipeline fetches its URLs strictly one at a time, in order. A failed
//! fetch becomes a [`DownloadOutcome::Failed`] entry and the batch moves on,
//! so a run over `N` URLs always returns exactly `N` outcomes in input order.
//!
//! # Example
//!
//! ```no_run
//! use fusker_core::download::{DownloadPipeline, HttpClient};
//! use std::path::Path;
//!
//! # async fn example() {
//! let pipeline = DownloadPipeline::new(HttpClient::new());
//! let urls = vec!["https://example.com/img01.jpg".to_string()];
//! let outcomes = pipeline.run(Path::new("./downloads"), &urls).await;
//! assert_eq!(outcomes.len(), urls.len());
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::error::{DownloadError, FailureKind};
use super::transport::Transport;

/// Result of one download attempt within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// The body was written to `local_path`.
    Succeeded {
        /// The URL that was fetched.
        url: String,
        /// Where the file was written.
        local_path: PathBuf,
    },
    /// The attempt failed, or never happened because the batch was interrupted.
    Failed {
        /// The URL that failed.
        url: String,
        /// Failure class.
        kind: FailureKind,
        /// Human-readable description of the failure.
        error: String,
    },
}

impl DownloadOutcome {
    fn from_result(url: &str, result: Result<PathBuf, DownloadError>) -> Self {
        match result {
            Ok(local_path) => Self::Succeeded {
                url: url.to_string(),
                local_path,
            },
            Err(error) => Self::Failed {
                url: url.to_string(),
                kind: error.kind(),
                error: error.to_string(),
            },
        }
    }

    fn cancelled(url: &str) -> Self {
        Self::Failed {
            url: url.to_string(),
            kind: FailureKind::Cancelled,
            error: "cancelled before download started".to_string(),
        }
    }

    /// The URL this outcome belongs to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Succeeded { url, .. } | Self::Failed { url, .. } => url,
        }
    }

    /// Returns `true` for a successful download.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// The written file, for successful downloads.
    #[must_use]
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::Succeeded { local_path, .. } => Some(local_path),
            Self::Failed { .. } => None,
        }
    }

    /// The failure class, for failed downloads.
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeSummary {
    /// Files written.
    pub succeeded: usize,
    /// Attempts that failed (cancelled items included).
    pub failed: usize,
    /// Items never attempted because the batch was interrupted.
    pub cancelled: usize,
}

impl OutcomeSummary {
    /// Tallies `outcomes`.
    #[must_use]
    pub fn from_outcomes(outcomes: &[DownloadOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut summary, outcome| {
            match outcome.failure_kind() {
                None => summary.succeeded += 1,
                Some(kind) => {
                    summary.failed += 1;
                    if kind == FailureKind::Cancelled {
                        summary.cancelled += 1;
                    }
                }
            }
            summary
        })
    }

    /// Total number of outcomes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Runs a list of URLs through a [`Transport`], one at a time.
///
/// No fetch starts before the previous one has settled, so at most one
/// connection and one open file exist per batch and writes into the
/// destination directory never race within a batch. Separate batches
/// writing the same file names into the same directory are not coordinated.
#[derive(Debug)]
pub struct DownloadPipeline<T> {
    transport: T,
    interrupted: Arc<AtomicBool>,
}

impl<T: Transport> DownloadPipeline<T> {
    /// Creates a pipeline over `transport` with its own interrupt flag.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Uses a shared interrupt flag, e.g. one set from a Ctrl-C handler.
    #[must_use]
    pub fn with_interrupt(mut self, interrupted: Arc<AtomicBool>) -> Self {
        self.interrupted = interrupted;
        self
    }

    /// Returns the flag that stops the batch before its next fetch.
    #[must_use]
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Downloads every URL into `destination_dir`, in order.
    ///
    /// Never fails as a whole: each item's failure is captured in its outcome.
    pub async fn run(&self, destination_dir: &Path, urls: &[String]) -> Vec<DownloadOutcome> {
        self.run_with_observer(destination_dir, urls, |_, _| {})
            .await
    }

    /// Like [`run`](Self::run), calling `on_settled(index, outcome)` as soon
    /// as each item settles.
    #[instrument(skip_all, fields(destination = %destination_dir.display(), total = urls.len()))]
    pub async fn run_with_observer<F>(
        &self,
        destination_dir: &Path,
        urls: &[String],
        mut on_settled: F,
    ) -> Vec<DownloadOutcome>
    where
        F: FnMut(usize, &DownloadOutcome),
    {
        let mut outcomes = Vec::with_capacity(urls.len());
        let mut interrupt_logged = false;

        for (index, url) in urls.iter().enumerate() {
            let outcome = if self.interrupted.load(Ordering::SeqCst) {
                if !interrupt_logged {
                    warn!(
                        remaining = urls.len() - index,
                        "batch interrupted; skipping remaining URLs"
                    );
                    interrupt_logged = true;
                }
                DownloadOutcome::cancelled(url)
            } else {
                debug!(index, url = %url, "fetching");
                let result = self.transport.fetch(url, destination_dir).await;
                if let Err(error) = &result {
                    warn!(url = %url, error = %error, "download failed; continuing with next URL");
                }
                DownloadOutcome::from_result(url, result)
            };

            on_settled(index, &outcome);
            outcomes.push(outcome);
        }

        let summary = OutcomeSummary::from_outcomes(&outcomes);
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "batch complete"
        );
        outcomes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use async_trait::async_trait;

    /// Fails URLs containing "fail", records call order and concurrency.
    #[derive(Default)]
    struct ScriptedTransport {
        calls: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        interrupt_after: Option<(usize, Arc<AtomicBool>)>,
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn fetch(
            &self,
            url: &str,
            destination_dir: &Path,
        ) -> Result<PathBuf, DownloadError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let call_count = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(url.to_string());
                calls.len()
            };
            if let Some((after, flag)) = &self.interrupt_after
                && call_count == *after
            {
                flag.store(true, Ordering::SeqCst);
            }

            if url.contains("fail") {
                Err(DownloadError::http_status(url, 404))
            } else {
                let name = url.rsplit('/').next().unwrap();
                Ok(destination_dir.join(name))
            }
        }
    }

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_returns_one_outcome_per_url_in_order() {
        let pipeline = DownloadPipeline::new(ScriptedTransport::default());
        let input = urls(&["http://x/1.jpg", "http://x/fail.jpg", "http://x/3.jpg"]);

        let outcomes = pipeline.run(Path::new("/out"), &input).await;

        assert_eq!(outcomes.len(), 3);
        for (outcome, url) in outcomes.iter().zip(&input) {
            assert_eq!(outcome.url(), url);
        }
        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
        assert!(outcomes[2].is_success());
    }

    #[tokio::test]
    async fn test_run_continues_after_failures() {
        let pipeline = DownloadPipeline::new(ScriptedTransport::default());
        let input = urls(&["http://x/fail1", "http://x/fail2", "http://x/ok.jpg"]);

        let outcomes = pipeline.run(Path::new("/out"), &input).await;

        assert_eq!(pipeline.transport.calls.lock().unwrap().as_slice(), input.as_slice());
        assert_eq!(
            outcomes[2].local_path(),
            Some(Path::new("/out/ok.jpg"))
        );
        match &outcomes[0] {
            DownloadOutcome::Failed { kind, error, .. } => {
                assert_eq!(*kind, FailureKind::Transport);
                assert!(error.contains("404"), "Expected status in: {error}");
            }
            other => panic!("Expected Failed, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_never_overlaps_fetches() {
        let pipeline = DownloadPipeline::new(ScriptedTransport::default());
        let input: Vec<String> = (0..8).map(|i| format!("http://x/{i}.jpg")).collect();

        let outcomes = pipeline.run(Path::new("/out"), &input).await;

        assert_eq!(outcomes.len(), 8);
        assert_eq!(pipeline.transport.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_empty_batch() {
        let pipeline = DownloadPipeline::new(ScriptedTransport::default());
        let outcomes = pipeline.run(Path::new("/out"), &[]).await;
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_interrupt_marks_remaining_items_cancelled() {
        let flag = Arc::new(AtomicBool::new(false));
        let transport = ScriptedTransport {
            interrupt_after: Some((2, Arc::clone(&flag))),
            ..ScriptedTransport::default()
        };
        let pipeline = DownloadPipeline::new(transport).with_interrupt(flag);
        let input = urls(&["http://x/1", "http://x/2", "http://x/3", "http://x/4"]);

        let outcomes = pipeline.run(Path::new("/out"), &input).await;

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].is_success());
        assert!(outcomes[1].is_success());
        assert_eq!(outcomes[2].failure_kind(), Some(FailureKind::Cancelled));
        assert_eq!(outcomes[3].failure_kind(), Some(FailureKind::Cancelled));
        assert_eq!(outcomes[3].url(), "http://x/4");
        assert_eq!(pipeline.transport.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_interrupt_handle_is_shared() {
        let pipeline = DownloadPipeline::new(ScriptedTransport::default());
        pipeline.interrupt_handle().store(true, Ordering::SeqCst);

        let outcomes = pipeline.run(Path::new("/out"), &urls(&["http://x/1"])).await;

        assert_eq!(outcomes[0].failure_kind(), Some(FailureKind::Cancelled));
        assert!(pipeline.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_each_outcome_in_order() {
        let pipeline = DownloadPipeline::new(ScriptedTransport::default());
        let input = urls(&["http://x/a", "http://x/fail", "http://x/c"]);
        let mut seen = Vec::new();

        let outcomes = pipeline
            .run_with_observer(Path::new("/out"), &input, |index, outcome| {
                seen.push((index, outcome.clone()));
            })
            .await;

        let indices: Vec<usize> = seen.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        let observed: Vec<DownloadOutcome> = seen.into_iter().map(|(_, o)| o).collect();
        assert_eq!(observed, outcomes);
    }

    #[test]
    fn test_outcome_summary_counts() {
        let outcomes = vec![
            DownloadOutcome::Succeeded {
                url: "http://x/a".to_string(),
                local_path: PathBuf::from("/out/a"),
            },
            DownloadOutcome::from_result("http://x/b", Err(DownloadError::timeout("http://x/b"))),
            DownloadOutcome::cancelled("http://x/c"),
        ];

        let summary = OutcomeSummary::from_outcomes(&outcomes);

        assert_eq!(
            summary,
            OutcomeSummary {
                succeeded: 1,
                failed: 2,
                cancelled: 1,
            }
        );
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = DownloadOutcome::from_result(
            "http://x/b",
            Err(DownloadError::http_status("http://x/b", 404)),
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["kind"], "transport");
        assert_eq!(json["url"], "http://x/b");

        let ok = DownloadOutcome::Succeeded {
            url: "http://x/a".to_string(),
            local_path: PathBuf::from("/out/a"),
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["local_path"], "/out/a");
    }
}
