//! Query and suggestion types exchanged with callers of the engine.

use crate::entry::CatalogEntry;
use serde::{Deserialize, Serialize};

/// The unit of work submitted to the engine: one purchase-request line
/// item carrying an externally-sourced part identifier, a free-text
/// description, or both.
///
/// Both fields empty is valid input; the engine returns no candidates for
/// such a query without error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LineItemQuery {
    #[inline]
    #[must_use]
    pub fn new(identifier: Option<String>, description: Option<String>) -> Self {
        Self {
            identifier,
            description,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            description: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            identifier: None,
            description: Some(description.into()),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when neither field contains a non-whitespace character.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        let blank = |field: &Option<String>| {
            field
                .as_deref()
                .map(|s| s.trim().is_empty())
                .unwrap_or(true)
        };
        blank(&self.identifier) && blank(&self.description)
    }
}

/// Which tier produced a candidate.
///
/// Doubles as the tie-break order between candidates with equal scores:
/// lower [`MatchKind::priority`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Resolved through a curated foreign-to-internal key mapping.
    CrossReference,
    /// Stocking key equals the queried identifier.
    KeyExact,
    /// Stocking key contains the queried identifier, or the entry surfaced
    /// from an identifier search without a key relationship.
    KeyPartial,
    /// Description/name token overlap.
    NameOverlap,
    /// Nearest neighbor in embedding space.
    Semantic,
}

impl MatchKind {
    /// Fixed tie-break rank; lower is stronger evidence.
    #[inline]
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            MatchKind::CrossReference => 0,
            MatchKind::KeyExact => 1,
            MatchKind::KeyPartial => 2,
            MatchKind::NameOverlap => 3,
            MatchKind::Semantic => 4,
        }
    }
}

/// One suggestion returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub entry: CatalogEntry,
    /// Confidence in [0.0, 1.0]; sorting candidates by descending score
    /// reproduces the engine's own ranking.
    pub score: f32,
    pub kind: MatchKind,
}

/// The engine's output for one batch of queries: per input index, an
/// ordered list of at most top-N candidates.
///
/// Constructed fresh per request and never persisted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionResult {
    matches: Vec<Vec<CandidateMatch>>,
}

impl SuggestionResult {
    #[inline]
    #[must_use]
    pub fn from_matches(matches: Vec<Vec<CandidateMatch>>) -> Self {
        Self { matches }
    }

    /// Candidates for the query at `index` within the submitted batch.
    /// Out-of-range indices yield an empty slice.
    #[must_use]
    pub fn for_index(&self, index: usize) -> &[CandidateMatch] {
        self.matches.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate (query index, candidates) pairs in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[CandidateMatch])> {
        self.matches.iter().map(Vec::as_slice).enumerate()
    }

    /// Number of queries in the batch this result was built for.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
