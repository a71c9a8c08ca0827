//! The candidate-generation tiers of the matching pipeline.
//!
//! Tiers run in a fixed order per query: cross-reference, identifier,
//! text overlap, then (behind the cost gate) semantic fallback. Each
//! tier degrades to zero candidates on collaborator failure or timeout;
//! a failed tier never fails the query.

pub(crate) mod cross_reference;
pub(crate) mod identifier;
pub(crate) mod overlap;
pub(crate) mod semantic;

use partmatch_core::Result;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Await a collaborator call under a timeout, recovering failure at the
/// tier boundary. Returns `None` on error or timeout, after logging the
/// tier name and query index at warning level.
pub(crate) async fn guarded<T, F>(
    tier: &'static str,
    query_index: usize,
    limit: Duration,
    call: F,
) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(err)) => {
            warn!(tier, query_index, error = %err, "tier lookup failed");
            None
        }
        Err(_) => {
            warn!(
                tier,
                query_index,
                timeout_ms = limit.as_millis() as u64,
                "tier lookup timed out"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partmatch_core::Error;

    #[tokio::test]
    async fn test_guarded_passes_values_through() {
        let value = guarded("test", 0, Duration::from_secs(1), async { Ok(42) }).await;
        assert_eq!(value, Some(42));
    }

    #[tokio::test]
    async fn test_guarded_absorbs_errors() {
        let value: Option<u32> = guarded("test", 0, Duration::from_secs(1), async {
            Err(Error::CatalogStore("down".into()))
        })
        .await;
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_guarded_times_out() {
        let value: Option<u32> = guarded("test", 0, Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(1)
        })
        .await;
        assert_eq!(value, None);
    }
}
