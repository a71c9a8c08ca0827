//! # partmatch
//!
//! A catalog matching and suggestion engine: resolves free-text or
//! partially-structured purchase-request line items to the best candidate
//! entries in a distributor's product catalog.
//!
//! Each line item - an item description, an externally-sourced part
//! identifier, or both - runs through a tiered pipeline:
//!
//! 1. **Cross-reference resolution** - curated foreign-to-internal key
//!    mappings, scored near-certain
//! 2. **Identifier matching** - exact and partial matches against
//!    catalog stocking keys
//! 3. **Text overlap** - token search against entry names
//! 4. **Semantic fallback** - embedding nearest-neighbor search, invoked
//!    only when the deterministic tiers stay below the confidence gate
//!
//! Candidates are deduplicated by catalog identity, ranked by score with
//! a deterministic tier-priority tie-break, and truncated to the top N.
//! Downstream logic relies on the scores to decide when a human needs to
//! review a match.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use partmatch::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> partmatch::Result<()> {
//! let tenant = TenantId::new("acme");
//!
//! // Stores are collaborator traits; the bundled in-memory versions
//! // work for tests and small catalogs.
//! let catalog = Arc::new(MemoryCatalog::new());
//! catalog.insert(&tenant, CatalogEntry::new("WID-001", "Industrial Widget"));
//!
//! let engine = MatchEngine::new(
//!     MatchConfig::default(),
//!     catalog,
//!     Arc::new(MemoryCrossReferences::new()),
//!     Arc::new(HashEmbedder::default()),
//!     Arc::new(CosineIndex::new()),
//! )?;
//!
//! let batch = vec![LineItemQuery::from_identifier("WID-001")];
//! let suggestions = engine.suggest(&tenant, &batch).await;
//!
//! let best = &suggestions.for_index(0)[0];
//! assert_eq!(best.entry.key, "WID-001");
//! assert_eq!(best.kind, MatchKind::KeyExact);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`partmatch-core`](https://docs.rs/partmatch-core) - data model,
//!   normalization, configuration
//! - [`partmatch-store`](https://docs.rs/partmatch-store) - collaborator
//!   ports and in-memory reference implementations
//! - [`partmatch-engine`](https://docs.rs/partmatch-engine) - the tiered
//!   matching pipeline

// Re-export core types
pub use partmatch_core::{
    normalize, CandidateMatch, CatalogEntry, CatalogId, CrossReferenceEntry, Error,
    LineItemQuery, MatchConfig, MatchKind, Result, SuggestionResult, TenantId, TierScores,
};

// Re-export collaborator ports and reference implementations
pub use partmatch_store::{
    cosine_similarity, CatalogStore, CosineIndex, CrossReferenceStore, EmbeddingProvider,
    HashEmbedder, MemoryCatalog, MemoryCrossReferences, VectorIndex,
};

// Re-export the engine
pub use partmatch_engine::{MatchEngine, MetricsSnapshot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CandidateMatch, CatalogEntry, CatalogId, CatalogStore, CosineIndex,
        CrossReferenceEntry, CrossReferenceStore, EmbeddingProvider, Error, HashEmbedder,
        LineItemQuery, MatchConfig, MatchEngine, MatchKind, MemoryCatalog,
        MemoryCrossReferences, MetricsSnapshot, Result, SuggestionResult, TenantId,
        TierScores, VectorIndex,
    };
}
