//! Cross-reference tier: foreign identifier to internal catalog key.

use crate::accumulator::CandidateAccumulator;
use crate::tiers::guarded;
use partmatch_core::{normalize, MatchConfig, MatchKind, TenantId};
use partmatch_store::{CatalogStore, CrossReferenceStore};

const TIER: &str = "cross_reference";

/// Resolve a foreign part identifier through the cross-reference store.
///
/// Emits at most one candidate with a fixed score: a curated mapping is
/// near-certain evidence, not a computed similarity. A missing mapping,
/// or a mapping whose internal key is no longer in the catalog, yields
/// nothing.
pub(crate) async fn resolve(
    config: &MatchConfig,
    cross_references: &dyn CrossReferenceStore,
    catalog: &dyn CatalogStore,
    tenant: &TenantId,
    raw_identifier: &str,
    query_index: usize,
    acc: &mut CandidateAccumulator,
) {
    // Foreign identifiers are often case-sensitive: trim only.
    let foreign_key = normalize::trimmed(raw_identifier);
    if foreign_key.is_empty() {
        return;
    }

    let Some(mapping) = guarded(
        TIER,
        query_index,
        config.store_timeout,
        cross_references.find_mapping(tenant, foreign_key),
    )
    .await
    else {
        return;
    };
    let Some(internal_key) = mapping else {
        return;
    };

    let Some(found) = guarded(
        TIER,
        query_index,
        config.store_timeout,
        catalog.get_by_key(tenant, &internal_key),
    )
    .await
    else {
        return;
    };
    let Some(entry) = found else {
        return;
    };

    // A mapping only counts while the catalog still carries the exact key.
    if entry.key.eq_ignore_ascii_case(&internal_key) {
        acc.push(entry, config.scores.cross_reference, MatchKind::CrossReference);
    }
}
