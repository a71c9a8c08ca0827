//! Per-query candidate accumulation and ranking.

use ahash::AHashSet;
use ordered_float::OrderedFloat;
use partmatch_core::{CandidateMatch, CatalogEntry, CatalogId, MatchKind};
use std::cmp::Reverse;

/// Candidate set for one query's pipeline run.
///
/// Owned by the aggregator and threaded through the tiers of a single
/// query only, never shared across queries. Dedup is by [`CatalogId`]:
/// the first tier to claim an id wins and later tiers skip it.
#[derive(Debug, Default)]
pub(crate) struct CandidateAccumulator {
    seen: AHashSet<CatalogId>,
    candidates: Vec<CandidateMatch>,
}

impl CandidateAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether an entry with this id has already been claimed by a tier.
    pub(crate) fn contains(&self, id: CatalogId) -> bool {
        self.seen.contains(&id)
    }

    /// Record a candidate unless its catalog id is already claimed.
    /// Scores are clamped to [0.0, 1.0] on the way in.
    pub(crate) fn push(&mut self, entry: CatalogEntry, score: f32, kind: MatchKind) -> bool {
        if !self.seen.insert(entry.catalog_id) {
            return false;
        }
        self.candidates.push(CandidateMatch {
            entry,
            score: score.clamp(0.0, 1.0),
            kind,
        });
        true
    }

    /// Best score accumulated so far; 0.0 when empty. Drives the semantic
    /// cost gate.
    pub(crate) fn best_score(&self) -> f32 {
        self.candidates
            .iter()
            .map(|c| c.score)
            .fold(0.0, f32::max)
    }

    /// Rank and truncate: score descending, ties broken by tier priority,
    /// then by discovery order (the sort is stable).
    pub(crate) fn into_ranked(self, top_n: usize) -> Vec<CandidateMatch> {
        let mut candidates = self.candidates;
        candidates
            .sort_by_key(|c| (Reverse(OrderedFloat(c.score)), c.kind.priority()));
        candidates.truncate(top_n);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> CatalogEntry {
        CatalogEntry::new(key, key.to_lowercase())
    }

    #[test]
    fn test_first_tier_claims_id() {
        let mut acc = CandidateAccumulator::new();
        let e = entry("WID-001");
        let id = e.catalog_id;

        assert!(acc.push(e.clone(), 0.95, MatchKind::CrossReference));
        assert!(!acc.push(e, 0.5, MatchKind::KeyPartial));
        assert!(acc.contains(id));

        let ranked = acc.into_ranked(5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].kind, MatchKind::CrossReference);
    }

    #[test]
    fn test_scores_clamped() {
        let mut acc = CandidateAccumulator::new();
        acc.push(entry("A"), 1.7, MatchKind::Semantic);
        acc.push(entry("B"), -0.3, MatchKind::Semantic);

        let ranked = acc.into_ranked(5);
        assert_eq!(ranked[0].score, 1.0);
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    fn test_rank_by_score_descending() {
        let mut acc = CandidateAccumulator::new();
        acc.push(entry("LOW"), 0.4, MatchKind::NameOverlap);
        acc.push(entry("HIGH"), 1.0, MatchKind::KeyExact);
        acc.push(entry("MID"), 0.8, MatchKind::KeyPartial);

        let ranked = acc.into_ranked(5);
        let keys: Vec<&str> = ranked.iter().map(|c| c.entry.key.as_str()).collect();
        assert_eq!(keys, ["HIGH", "MID", "LOW"]);
    }

    #[test]
    fn test_equal_scores_break_by_tier_priority() {
        // The overlap candidate is discovered first but the identifier
        // tier outranks it at the same score.
        let mut acc = CandidateAccumulator::new();
        acc.push(entry("OVERLAP"), 0.6, MatchKind::NameOverlap);
        acc.push(entry("KEYED"), 0.6, MatchKind::KeyPartial);

        let ranked = acc.into_ranked(5);
        assert_eq!(ranked[0].entry.key, "KEYED");
        assert_eq!(ranked[1].entry.key, "OVERLAP");
    }

    #[test]
    fn test_full_ties_keep_discovery_order() {
        let mut acc = CandidateAccumulator::new();
        acc.push(entry("FIRST"), 0.4, MatchKind::NameOverlap);
        acc.push(entry("SECOND"), 0.4, MatchKind::NameOverlap);

        let ranked = acc.into_ranked(5);
        assert_eq!(ranked[0].entry.key, "FIRST");
        assert_eq!(ranked[1].entry.key, "SECOND");
    }

    #[test]
    fn test_truncates_to_top_n() {
        let mut acc = CandidateAccumulator::new();
        for i in 0..10 {
            acc.push(entry(&format!("E-{i}")), 0.4, MatchKind::NameOverlap);
        }
        assert_eq!(acc.into_ranked(5).len(), 5);
    }

    #[test]
    fn test_best_score_tracks_maximum() {
        let mut acc = CandidateAccumulator::new();
        assert_eq!(acc.best_score(), 0.0);
        acc.push(entry("A"), 0.5, MatchKind::KeyPartial);
        acc.push(entry("B"), 0.8, MatchKind::KeyPartial);
        assert_eq!(acc.best_score(), 0.8);
    }
}
