//! Engine configuration.
//!
//! All heuristic constants of the matching pipeline live here rather than
//! as literals in the tiers. The relative ordering of tier scores is part
//! of the ranking contract; [`MatchConfig::validate`] rejects
//! configurations that break it. Validation runs once at engine
//! construction, never per query.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-tier candidate scores.
///
/// The exact values are tunable; the orderings `key_exact > key_partial >
/// key_name_only` and `name_contained > name_fuzzy` are load-bearing for
/// downstream threshold decisions and must hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierScores {
    /// A curated cross-reference hit is treated as near-certain.
    pub cross_reference: f32,
    /// Normalized stocking key equals the queried identifier.
    pub key_exact: f32,
    /// Queried identifier is a substring of the stocking key.
    pub key_partial: f32,
    /// Entry surfaced only because the search also scanned names.
    pub key_name_only: f32,
    /// Whole-string containment between query description and entry name.
    pub name_contained: f32,
    /// Entry surfaced via search relevance without strict containment.
    pub name_fuzzy: f32,
}

impl Default for TierScores {
    fn default() -> Self {
        Self {
            cross_reference: 0.95,
            key_exact: 1.0,
            key_partial: 0.8,
            key_name_only: 0.5,
            name_contained: 0.6,
            name_fuzzy: 0.4,
        }
    }
}

impl TierScores {
    fn all(&self) -> [(&'static str, f32); 6] {
        [
            ("cross_reference", self.cross_reference),
            ("key_exact", self.key_exact),
            ("key_partial", self.key_partial),
            ("key_name_only", self.key_name_only),
            ("name_contained", self.name_contained),
            ("name_fuzzy", self.name_fuzzy),
        ]
    }
}

/// Configuration for the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum candidates returned per query.
    pub top_n: usize,
    /// Result cap for catalog store text searches.
    pub search_limit: usize,
    /// Nearest neighbors requested from the vector index.
    pub semantic_k: usize,
    /// Minimum cosine similarity accepted from the vector index.
    pub min_similarity: f32,
    /// Semantic fallback runs only while the best accumulated score is
    /// below this threshold.
    pub semantic_gate: f32,
    /// Concurrency cap for in-flight queries within a batch.
    pub max_in_flight: usize,
    /// Timeout for catalog and cross-reference store lookups.
    pub store_timeout: Duration,
    /// Timeout for embedding generation.
    pub embed_timeout: Duration,
    /// Timeout for vector index search.
    pub index_timeout: Duration,
    pub scores: TierScores,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            search_limit: 20,
            semantic_k: 5,
            min_similarity: 0.7,
            semantic_gate: 0.8,
            max_in_flight: 8,
            store_timeout: Duration::from_secs(5),
            embed_timeout: Duration::from_secs(10),
            index_timeout: Duration::from_secs(5),
            scores: TierScores::default(),
        }
    }
}

impl MatchConfig {
    /// Validate the configuration, failing fast on contract violations.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".into()));
        }
        if self.search_limit == 0 {
            return Err(Error::InvalidConfig("search_limit must be at least 1".into()));
        }
        if self.semantic_k == 0 {
            return Err(Error::InvalidConfig("semantic_k must be at least 1".into()));
        }
        if self.max_in_flight == 0 {
            return Err(Error::InvalidConfig("max_in_flight must be at least 1".into()));
        }
        for (name, value) in [
            ("min_similarity", self.min_similarity),
            ("semantic_gate", self.semantic_gate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0.0, 1.0], got {value}"
                )));
            }
        }
        for (name, score) in self.scores.all() {
            if !(0.0..=1.0).contains(&score) {
                return Err(Error::InvalidConfig(format!(
                    "score {name} must be within [0.0, 1.0], got {score}"
                )));
            }
        }
        if self.scores.key_exact <= self.scores.key_partial
            || self.scores.key_partial <= self.scores.key_name_only
        {
            return Err(Error::InvalidConfig(
                "identifier scores must satisfy key_exact > key_partial > key_name_only".into(),
            ));
        }
        if self.scores.name_contained <= self.scores.name_fuzzy {
            return Err(Error::InvalidConfig(
                "overlap scores must satisfy name_contained > name_fuzzy".into(),
            ));
        }
        for (name, timeout) in [
            ("store_timeout", self.store_timeout),
            ("embed_timeout", self.embed_timeout),
            ("index_timeout", self.index_timeout),
        ] {
            if timeout.is_zero() {
                return Err(Error::InvalidConfig(format!("{name} must be non-zero")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let config = MatchConfig {
            top_n: 0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let mut config = MatchConfig::default();
        config.scores.key_exact = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_score_ordering_violation_rejected() {
        // Swapping partial and exact breaks tie-break semantics.
        let mut config = MatchConfig::default();
        config.scores.key_exact = 0.7;
        assert!(config.validate().is_err());

        let mut config = MatchConfig::default();
        config.scores.name_fuzzy = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = MatchConfig {
            embed_timeout: Duration::ZERO,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tuned_scores_accepted() {
        let mut config = MatchConfig::default();
        config.scores.key_partial = 0.75;
        config.scores.name_fuzzy = 0.35;
        assert!(config.validate().is_ok());
    }
}
