/// Data acquisition: live backend or canned offline sample
pub mod sample;

use crate::domain::{Dataset, Issue, Mode, Stats};
use crate::errors::{AcquisitionError, AcquisitionResult};
use crate::services::aggregator::aggregate;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub use sample::offline_dataset;

/// The two calls a Live acquisition needs from the classification backend
#[async_trait]
pub trait LiveBackend: Send + Sync {
    /// Trigger (re-)analysis and return the resulting issues
    async fn analyze(&self) -> AcquisitionResult<Vec<Issue>>;

    /// Current aggregate statistics
    async fn stats(&self) -> AcquisitionResult<Stats>;
}

/// Produces a dataset for the requested mode
pub struct DataSource {
    backend: Arc<dyn LiveBackend>,
    timeout: Duration,
    recompute_live_stats: bool,
}

impl DataSource {
    pub fn new(backend: Arc<dyn LiveBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            recompute_live_stats: false,
        }
    }

    /// Re-derive Live stats from the issue list instead of trusting the backend
    pub fn with_recomputed_stats(mut self, enabled: bool) -> Self {
        self.recompute_live_stats = enabled;
        self
    }

    pub async fn acquire(&self, mode: Mode) -> AcquisitionResult<Dataset> {
        match mode {
            Mode::Live => self.acquire_live().await,
            Mode::Offline => Ok(self.offline()),
        }
    }

    /// The offline sample; cannot fail and performs no I/O
    pub fn offline(&self) -> Dataset {
        offline_dataset()
    }

    /// Analyze first, then stats; both must succeed within the timeout.
    async fn acquire_live(&self) -> AcquisitionResult<Dataset> {
        let calls = async {
            let issues = self.backend.analyze().await?;
            let stats = self.backend.stats().await?;
            Ok::<_, AcquisitionError>((issues, stats))
        };

        let (issues, stats) = tokio::time::timeout(self.timeout, calls)
            .await
            .map_err(|_| AcquisitionError::timed_out(self.timeout))??;

        debug!(issues = issues.len(), "live acquisition returned");

        if self.recompute_live_stats {
            let stats = aggregate(&issues);
            return Ok(Dataset { issues, stats });
        }

        if !stats.is_consistent_with(&issues) {
            warn!(
                issues = issues.len(),
                total_issues = stats.total_issues,
                "backend stats disagree with the delivered issues"
            );
        }
        Ok(Dataset { issues, stats })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{issue, FakeBackend};
    use super::*;
    use std::sync::atomic::Ordering;

    fn source(backend: Arc<FakeBackend>) -> DataSource {
        DataSource::new(backend, Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_offline_never_touches_backend() {
        let backend = Arc::new(FakeBackend::empty());
        backend
            .fail_analyze(AcquisitionError::Network("down".into()))
            .await;

        let data = source(backend.clone()).acquire(Mode::Offline).await.unwrap();
        assert_eq!(data, offline_dataset());
        assert_eq!(backend.analyze_calls(), 0);
    }

    #[tokio::test]
    async fn test_live_trusts_backend_stats() {
        let issues = vec![issue(1, "flood", 90.0, "Demra")];
        // Deliberately inconsistent: stats are passed through as-is
        let stats = Stats {
            total_issues: 5,
            ..Stats::default()
        };
        let backend = Arc::new(FakeBackend::new(issues.clone(), stats.clone()));

        let data = source(backend).acquire(Mode::Live).await.unwrap();
        assert_eq!(data.issues, issues);
        assert_eq!(data.stats, stats);
    }

    #[tokio::test]
    async fn test_live_recompute_replaces_backend_stats() {
        let issues = vec![issue(1, "flood", 90.0, "Demra"), issue(2, "flood", 20.0, "")];
        let stats = Stats {
            total_issues: 5,
            ..Stats::default()
        };
        let backend = Arc::new(FakeBackend::new(issues.clone(), stats));

        let data = source(backend)
            .with_recomputed_stats(true)
            .acquire(Mode::Live)
            .await
            .unwrap();
        assert_eq!(data.stats, aggregate(&issues));
    }

    #[tokio::test]
    async fn test_stats_failure_fails_whole_acquisition() {
        let backend = Arc::new(FakeBackend::empty());
        backend
            .fail_stats(AcquisitionError::Backend {
                endpoint: "/api/stats",
                status: 500,
                message: "boom".into(),
            })
            .await;

        let err = source(backend.clone()).acquire(Mode::Live).await.unwrap_err();
        assert_eq!(err.kind(), "backend");
        assert_eq!(backend.analyze_calls(), 1);
    }

    #[tokio::test]
    async fn test_analyze_failure_skips_stats() {
        let backend = Arc::new(FakeBackend::empty());
        backend
            .fail_analyze(AcquisitionError::Network("connection refused".into()))
            .await;

        let err = source(backend.clone()).acquire(Mode::Live).await.unwrap_err();
        assert_eq!(err.kind(), "network");
        assert_eq!(backend.stats_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_hung_backend_times_out() {
        let backend = Arc::new(FakeBackend::empty());
        backend.set_delay(Duration::from_secs(30)).await;

        let err = source(backend).acquire(Mode::Live).await.unwrap_err();
        assert_eq!(err.kind(), "network");
        assert!(err.to_string().contains("timed out"));
    }
}
