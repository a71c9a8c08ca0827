//! Identifier tier: exact and partial matches against catalog keys.

use crate::accumulator::CandidateAccumulator;
use crate::tiers::guarded;
use partmatch_core::{normalize, MatchConfig, MatchKind, TenantId};
use partmatch_store::CatalogStore;

const TIER: &str = "identifier";

/// Match a raw identifier against catalog stocking keys.
///
/// Sub-scoring preserves a total order of evidence strength: key equality
/// beats key containment, which beats an entry that only surfaced because
/// the search also scanned names. Identifiers of one or two characters
/// are skipped entirely; they match too much to mean anything.
pub(crate) async fn match_identifier(
    config: &MatchConfig,
    catalog: &dyn CatalogStore,
    tenant: &TenantId,
    raw_identifier: &str,
    query_index: usize,
    acc: &mut CandidateAccumulator,
) {
    let needle = normalize::normalize_identifier(raw_identifier);
    if needle.chars().count() <= normalize::MIN_TOKEN_LEN {
        return;
    }

    let Some(entries) = guarded(
        TIER,
        query_index,
        config.store_timeout,
        catalog.find_by_key_or_name(tenant, &needle, config.search_limit),
    )
    .await
    else {
        return;
    };

    for entry in entries {
        if acc.contains(entry.catalog_id) {
            continue;
        }

        let key = normalize::normalize_identifier(&entry.key);
        let (score, kind) = if key == needle {
            (config.scores.key_exact, MatchKind::KeyExact)
        } else if key.contains(&needle) {
            (config.scores.key_partial, MatchKind::KeyPartial)
        } else {
            // Surfaced via the name scan, not the key: weak evidence.
            (config.scores.key_name_only, MatchKind::KeyPartial)
        };
        acc.push(entry, score, kind);
    }
}
