//! Text overlap tier: token search against catalog entry names.

use crate::accumulator::CandidateAccumulator;
use crate::tiers::guarded;
use partmatch_core::{normalize, MatchConfig, MatchKind, TenantId};
use partmatch_store::CatalogStore;

const TIER: &str = "name_overlap";

/// Match a free-text description against catalog entry names.
///
/// Whole-string containment in either direction earns the higher overlap
/// score; entries the store's own relevance surfaced without a strict
/// containment relationship get the fuzzy score. Runs only when the
/// description yields at least one usable token.
pub(crate) async fn match_description(
    config: &MatchConfig,
    catalog: &dyn CatalogStore,
    tenant: &TenantId,
    raw_description: &str,
    query_index: usize,
    acc: &mut CandidateAccumulator,
) {
    let tokens = normalize::description_tokens(raw_description);
    if tokens.is_empty() {
        return;
    }
    let phrase = normalize::search_phrase(&tokens);

    let Some(entries) = guarded(
        TIER,
        query_index,
        config.store_timeout,
        catalog.find_by_key_or_name(tenant, &phrase, config.search_limit),
    )
    .await
    else {
        return;
    };

    let description = normalize::normalize_description(raw_description);
    for entry in entries {
        if acc.contains(entry.catalog_id) {
            continue;
        }

        let name = normalize::normalize_description(&entry.name);
        let contained = name.contains(&description) || description.contains(&name);
        let score = if contained {
            config.scores.name_contained
        } else {
            config.scores.name_fuzzy
        };
        acc.push(entry, score, MatchKind::NameOverlap);
    }
}
