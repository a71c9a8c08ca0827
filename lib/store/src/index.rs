//! Brute-force cosine vector index.
//!
//! Linear scan over a tenant's catalog embeddings. Exact (no ANN
//! approximation) and fast enough for catalogs in the tens of thousands
//! of entries; larger deployments plug a dedicated index behind the
//! [`VectorIndex`] trait instead.

use crate::traits::VectorIndex;
use ahash::AHashMap;
use async_trait::async_trait;
use ordered_float::OrderedFloat;
use parking_lot::RwLock;
use partmatch_core::{CatalogEntry, Error, Result, TenantId};
use tracing::warn;

/// Cosine similarity between two vectors. Mismatched dimensions or a
/// zero-magnitude side score 0.0.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// In-memory cosine index over catalog entries with embeddings.
#[derive(Debug, Default)]
pub struct CosineIndex {
    entries: RwLock<AHashMap<TenantId, Vec<CatalogEntry>>>,
}

impl CosineIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index an entry. The entry must carry an embedding; entries sharing
    /// a stocking key replace each other.
    pub fn insert(&self, tenant: &TenantId, entry: CatalogEntry) -> Result<()> {
        if entry.embedding.is_none() {
            return Err(Error::VectorIndex(format!(
                "entry {} has no embedding",
                entry.key
            )));
        }

        let mut entries = self.entries.write();
        let tenant_entries = entries.entry(tenant.clone()).or_default();
        match tenant_entries
            .iter_mut()
            .find(|existing| existing.key.eq_ignore_ascii_case(&entry.key))
        {
            Some(existing) => *existing = entry,
            None => tenant_entries.push(entry),
        }
        Ok(())
    }

    /// Number of indexed entries for a tenant.
    #[must_use]
    pub fn count(&self, tenant: &TenantId) -> usize {
        self.entries.read().get(tenant).map(Vec::len).unwrap_or(0)
    }
}

#[async_trait]
impl VectorIndex for CosineIndex {
    async fn nearest(
        &self,
        tenant: &TenantId,
        vector: &[f32],
        k: usize,
        min_similarity: f32,
    ) -> Result<Vec<(CatalogEntry, f32)>> {
        let entries = self.entries.read();
        let Some(tenant_entries) = entries.get(tenant) else {
            return Ok(Vec::new());
        };

        let mut scored: Vec<(CatalogEntry, f32)> = tenant_entries
            .iter()
            .filter_map(|entry| {
                let embedding = entry.embedding.as_deref()?;
                if embedding.len() != vector.len() {
                    // Malformed collaborator data: skip the neighbor, keep the tier alive.
                    warn!(
                        key = %entry.key,
                        expected = vector.len(),
                        actual = embedding.len(),
                        "skipping entry with mismatched embedding dimension"
                    );
                    return None;
                }
                let similarity = cosine_similarity(vector, embedding);
                (similarity >= min_similarity).then(|| (entry.clone(), similarity))
            })
            .collect();

        scored.sort_by_key(|(_, similarity)| std::cmp::Reverse(OrderedFloat(*similarity)));
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> TenantId {
        TenantId::new("acme")
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_insert_requires_embedding() {
        let index = CosineIndex::new();
        let entry = CatalogEntry::new("WID-001", "Industrial Widget");
        assert!(index.insert(&tenant(), entry).is_err());
    }

    #[tokio::test]
    async fn test_nearest_sorted_and_filtered() {
        let index = CosineIndex::new();
        index
            .insert(
                &tenant(),
                CatalogEntry::new("A", "a").with_embedding(vec![1.0, 0.0]),
            )
            .unwrap();
        index
            .insert(
                &tenant(),
                CatalogEntry::new("B", "b").with_embedding(vec![0.9, 0.1]),
            )
            .unwrap();
        index
            .insert(
                &tenant(),
                CatalogEntry::new("C", "c").with_embedding(vec![0.0, 1.0]),
            )
            .unwrap();

        let neighbors = index
            .nearest(&tenant(), &[1.0, 0.0], 5, 0.7)
            .await
            .unwrap();

        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].0.key, "A");
        assert_eq!(neighbors[1].0.key, "B");
        assert!(neighbors[0].1 >= neighbors[1].1);
    }

    #[tokio::test]
    async fn test_nearest_truncates_to_k() {
        let index = CosineIndex::new();
        for i in 0..10 {
            index
                .insert(
                    &tenant(),
                    CatalogEntry::new(format!("E-{i}"), "e").with_embedding(vec![1.0, 0.0]),
                )
                .unwrap();
        }
        let neighbors = index
            .nearest(&tenant(), &[1.0, 0.0], 3, 0.0)
            .await
            .unwrap();
        assert_eq!(neighbors.len(), 3);
    }

    #[tokio::test]
    async fn test_nearest_skips_mismatched_dimensions() {
        let index = CosineIndex::new();
        index
            .insert(
                &tenant(),
                CatalogEntry::new("GOOD", "good").with_embedding(vec![1.0, 0.0]),
            )
            .unwrap();
        index
            .insert(
                &tenant(),
                CatalogEntry::new("BAD", "bad").with_embedding(vec![1.0, 0.0, 0.0]),
            )
            .unwrap();

        let neighbors = index
            .nearest(&tenant(), &[1.0, 0.0], 5, 0.0)
            .await
            .unwrap();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].0.key, "GOOD");
    }
}
