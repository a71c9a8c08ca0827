//! The aggregator: runs the tier pipeline per query and assembles the
//! batch result.

use crate::accumulator::CandidateAccumulator;
use crate::metrics::{EngineMetrics, MetricsSnapshot};
use crate::tiers;
use futures_util::stream::{self, StreamExt};
use partmatch_core::{
    CandidateMatch, LineItemQuery, MatchConfig, Result, SuggestionResult, TenantId,
};
use partmatch_store::{CatalogStore, CrossReferenceStore, EmbeddingProvider, VectorIndex};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The catalog matching engine.
///
/// Holds handles to the four read-only collaborators; substitute fakes
/// in tests by passing different trait objects. Construction validates
/// the configuration once, so per-query work never re-checks it.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use partmatch_core::{LineItemQuery, MatchConfig, TenantId};
/// use partmatch_engine::MatchEngine;
/// use partmatch_store::{CosineIndex, HashEmbedder, MemoryCatalog, MemoryCrossReferences};
///
/// # async fn run() -> partmatch_core::Result<()> {
/// let engine = MatchEngine::new(
///     MatchConfig::default(),
///     Arc::new(MemoryCatalog::new()),
///     Arc::new(MemoryCrossReferences::new()),
///     Arc::new(HashEmbedder::default()),
///     Arc::new(CosineIndex::new()),
/// )?;
///
/// let tenant = TenantId::new("acme");
/// let batch = vec![LineItemQuery::from_identifier("WID-001")];
/// let result = engine.suggest(&tenant, &batch).await;
/// println!("{} candidates", result.for_index(0).len());
/// # Ok(())
/// # }
/// ```
pub struct MatchEngine {
    config: MatchConfig,
    catalog: Arc<dyn CatalogStore>,
    cross_references: Arc<dyn CrossReferenceStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    vector_index: Arc<dyn VectorIndex>,
    metrics: Arc<EngineMetrics>,
}

impl MatchEngine {
    /// Create an engine over the given collaborators.
    ///
    /// Fails fast on an invalid configuration; this is the only place
    /// configuration errors surface.
    pub fn new(
        config: MatchConfig,
        catalog: Arc<dyn CatalogStore>,
        cross_references: Arc<dyn CrossReferenceStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndex>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            cross_references,
            embedder,
            vector_index,
            metrics: Arc::new(EngineMetrics::default()),
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Suggest catalog candidates for a batch of line items.
    ///
    /// Queries are independent and processed concurrently up to the
    /// configured in-flight cap; the result is keyed by each query's
    /// index within the batch, so completion order never shows. This
    /// call always returns a result: tier failures degrade to fewer
    /// candidates for the affected index, never to an error.
    pub async fn suggest(&self, tenant: &TenantId, batch: &[LineItemQuery]) -> SuggestionResult {
        self.suggest_with_cancel(tenant, batch, &CancellationToken::new())
            .await
    }

    /// [`suggest`](Self::suggest) with cooperative cancellation.
    ///
    /// Once `cancel` fires, in-flight queries stop issuing new tier
    /// calls and their partial candidates are discarded; already-started
    /// collaborator calls are awaited up to their own timeouts.
    pub async fn suggest_with_cancel(
        &self,
        tenant: &TenantId,
        batch: &[LineItemQuery],
        cancel: &CancellationToken,
    ) -> SuggestionResult {
        let ranked: Vec<(usize, Vec<CandidateMatch>)> =
            stream::iter(batch.iter().enumerate())
                .map(|(query_index, query)| async move {
                    let candidates = self
                        .suggest_one(tenant, query, query_index, cancel)
                        .await;
                    (query_index, candidates)
                })
                .buffer_unordered(self.config.max_in_flight)
                .collect()
                .await;

        let mut matches = vec![Vec::new(); batch.len()];
        for (query_index, candidates) in ranked {
            matches[query_index] = candidates;
        }
        SuggestionResult::from_matches(matches)
    }

    /// Run the tier pipeline for one query.
    async fn suggest_one(
        &self,
        tenant: &TenantId,
        query: &LineItemQuery,
        query_index: usize,
        cancel: &CancellationToken,
    ) -> Vec<CandidateMatch> {
        self.metrics.record_query();

        // Both fields blank: no candidates, no collaborator calls.
        if query.is_blank() {
            return Vec::new();
        }

        let mut acc = CandidateAccumulator::new();

        if let Some(identifier) = query.identifier.as_deref() {
            if cancel.is_cancelled() {
                return Vec::new();
            }
            tiers::cross_reference::resolve(
                &self.config,
                self.cross_references.as_ref(),
                self.catalog.as_ref(),
                tenant,
                identifier,
                query_index,
                &mut acc,
            )
            .await;

            if cancel.is_cancelled() {
                return Vec::new();
            }
            tiers::identifier::match_identifier(
                &self.config,
                self.catalog.as_ref(),
                tenant,
                identifier,
                query_index,
                &mut acc,
            )
            .await;
        }

        let description = query
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        if let Some(description) = description {
            if cancel.is_cancelled() {
                return Vec::new();
            }
            tiers::overlap::match_description(
                &self.config,
                self.catalog.as_ref(),
                tenant,
                description,
                query_index,
                &mut acc,
            )
            .await;
        }

        // Cost gate: embedding and vector search are the expensive path,
        // reserved for queries the deterministic tiers could not settle.
        if acc.best_score() < self.config.semantic_gate {
            if let Some(description) = description {
                if cancel.is_cancelled() {
                    return Vec::new();
                }
                tiers::semantic::match_semantic(
                    &self.config,
                    self.embedder.as_ref(),
                    self.vector_index.as_ref(),
                    &self.metrics,
                    tenant,
                    description,
                    query_index,
                    &mut acc,
                )
                .await;
            }
        }

        acc.into_ranked(self.config.top_n)
    }
}
