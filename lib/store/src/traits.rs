//! Collaborator ports consumed by the matching engine.
//!
//! The engine is read-only toward all four collaborators; "not found" is
//! an expected outcome at every tier and is modeled as `Option`, never as
//! an error. Implementations own their connection pooling and are shared
//! behind `Arc` without engine-side locking.

use async_trait::async_trait;
use partmatch_core::{CatalogEntry, Result, TenantId};

/// Keyed lookup and substring search over catalog entries.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Entries whose `key` or `name` contains `text` as a case-insensitive
    /// substring, bounded to `limit` results.
    async fn find_by_key_or_name(
        &self,
        tenant: &TenantId,
        text: &str,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>>;

    /// The entry whose `key` equals `key` case-insensitively, if any.
    async fn get_by_key(&self, tenant: &TenantId, key: &str) -> Result<Option<CatalogEntry>>;
}

/// Lookup of curated foreign-to-internal key mappings.
#[async_trait]
pub trait CrossReferenceStore: Send + Sync {
    /// The internal catalog key mapped to `foreign_key`, if any. Exact,
    /// case-sensitive match: foreign identifiers are often case-sensitive.
    async fn find_mapping(&self, tenant: &TenantId, foreign_key: &str)
        -> Result<Option<String>>;
}

/// Produces fixed-dimensionality embedding vectors for query text.
///
/// The most expensive and most rate-limited collaborator in the pipeline;
/// calls may fail or time out and the engine degrades accordingly.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Dimensionality of every vector this provider returns.
    fn dimension(&self) -> usize;

    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Nearest-neighbor search over a tenant's catalog embeddings.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Up to `k` neighbors by cosine similarity, descending, filtered to
    /// `similarity >= min_similarity`.
    async fn nearest(
        &self,
        tenant: &TenantId,
        vector: &[f32],
        k: usize,
        min_similarity: f32,
    ) -> Result<Vec<(CatalogEntry, f32)>>;
}
