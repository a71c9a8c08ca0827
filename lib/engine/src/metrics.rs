//! Engine counters.
//!
//! Tier failures are recovered locally and never surface to the caller,
//! so repeated embedding-provider failures would otherwise degrade
//! suggestion quality silently. The counters here are the loud,
//! non-fatal surface for that: operators watch `embedding_failures`.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct EngineMetrics {
    queries: AtomicU64,
    semantic_invocations: AtomicU64,
    embedding_failures: AtomicU64,
}

impl EngineMetrics {
    pub(crate) fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_semantic_invocation(&self) {
        self.semantic_invocations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_embedding_failure(&self) {
        self.embedding_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            semantic_invocations: self.semantic_invocations.load(Ordering::Relaxed),
            embedding_failures: self.embedding_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the engine counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Queries processed, including blank ones.
    pub queries: u64,
    /// Times the semantic fallback tier actually ran.
    pub semantic_invocations: u64,
    /// Embedding calls that failed or timed out.
    pub embedding_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = EngineMetrics::default();
        metrics.record_query();
        metrics.record_query();
        metrics.record_semantic_invocation();
        metrics.record_embedding_failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.queries, 2);
        assert_eq!(snapshot.semantic_invocations, 1);
        assert_eq!(snapshot.embedding_failures, 1);
    }
}
