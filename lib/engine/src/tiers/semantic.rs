//! Semantic fallback tier: embedding nearest-neighbor search.

use crate::accumulator::CandidateAccumulator;
use crate::metrics::EngineMetrics;
use crate::tiers::guarded;
use partmatch_core::{normalize, MatchConfig, MatchKind, TenantId};
use partmatch_store::{EmbeddingProvider, VectorIndex};
use tracing::warn;

const TIER: &str = "semantic";

/// Embed the query description and search the vector index for nearest
/// catalog entries.
///
/// The caller holds the cost gate: this tier only runs when the
/// deterministic tiers left the best score below the gate threshold.
/// Embedding failures and timeouts are counted on the engine metrics
/// because they silently degrade suggestion quality; the tier itself
/// still degrades to zero candidates.
pub(crate) async fn match_semantic(
    config: &MatchConfig,
    embedder: &dyn EmbeddingProvider,
    vector_index: &dyn VectorIndex,
    metrics: &EngineMetrics,
    tenant: &TenantId,
    raw_description: &str,
    query_index: usize,
    acc: &mut CandidateAccumulator,
) {
    metrics.record_semantic_invocation();

    let text = normalize::normalize_description(raw_description);
    let vector = match tokio::time::timeout(config.embed_timeout, embedder.embed(&text)).await {
        Ok(Ok(vector)) => vector,
        Ok(Err(err)) => {
            metrics.record_embedding_failure();
            warn!(tier = TIER, query_index, error = %err, "embedding generation failed");
            return;
        }
        Err(_) => {
            metrics.record_embedding_failure();
            warn!(
                tier = TIER,
                query_index,
                timeout_ms = config.embed_timeout.as_millis() as u64,
                "embedding generation timed out"
            );
            return;
        }
    };

    if vector.len() != embedder.dimension() {
        metrics.record_embedding_failure();
        warn!(
            tier = TIER,
            query_index,
            expected = embedder.dimension(),
            actual = vector.len(),
            "embedding has wrong dimensionality"
        );
        return;
    }

    let Some(neighbors) = guarded(
        TIER,
        query_index,
        config.index_timeout,
        vector_index.nearest(tenant, &vector, config.semantic_k, config.min_similarity),
    )
    .await
    else {
        return;
    };

    for (entry, similarity) in neighbors {
        if acc.contains(entry.catalog_id) {
            continue;
        }
        acc.push(entry, similarity.clamp(0.0, 1.0), MatchKind::Semantic);
    }
}
