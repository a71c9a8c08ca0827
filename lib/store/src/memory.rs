//! In-memory reference implementations of the catalog and cross-reference
//! stores.
//!
//! Backed by `parking_lot` locks over per-tenant maps; scans run in
//! insertion order so search results are deterministic. Suitable for
//! tests and for small catalogs served entirely from memory.

use crate::traits::{CatalogStore, CrossReferenceStore};
use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use partmatch_core::{CatalogEntry, CrossReferenceEntry, Result, TenantId};

/// In-memory catalog store.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    entries: RwLock<AHashMap<TenantId, Vec<CatalogEntry>>>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. The stocking key is unique per tenant:
    /// an entry with the same key (case-insensitive) is replaced in place,
    /// keeping its scan position.
    pub fn insert(&self, tenant: &TenantId, entry: CatalogEntry) {
        let mut entries = self.entries.write();
        let tenant_entries = entries.entry(tenant.clone()).or_default();
        match tenant_entries
            .iter_mut()
            .find(|existing| existing.key.eq_ignore_ascii_case(&entry.key))
        {
            Some(existing) => *existing = entry,
            None => tenant_entries.push(entry),
        }
    }

    /// Number of entries held for a tenant.
    #[must_use]
    pub fn count(&self, tenant: &TenantId) -> usize {
        self.entries
            .read()
            .get(tenant)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find_by_key_or_name(
        &self,
        tenant: &TenantId,
        text: &str,
        limit: usize,
    ) -> Result<Vec<CatalogEntry>> {
        let needle = text.to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.entries.read();
        let Some(tenant_entries) = entries.get(tenant) else {
            return Ok(Vec::new());
        };

        Ok(tenant_entries
            .iter()
            .filter(|entry| {
                entry.key.to_lowercase().contains(&needle)
                    || entry.name.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_by_key(&self, tenant: &TenantId, key: &str) -> Result<Option<CatalogEntry>> {
        let entries = self.entries.read();
        Ok(entries.get(tenant).and_then(|tenant_entries| {
            tenant_entries
                .iter()
                .find(|entry| entry.key.eq_ignore_ascii_case(key))
                .cloned()
        }))
    }
}

/// In-memory cross-reference store.
///
/// Holds at most one internal key per (tenant, foreign_key) pair; imports
/// of the same pair overwrite the previous mapping.
#[derive(Debug, Default)]
pub struct MemoryCrossReferences {
    mappings: RwLock<AHashMap<(TenantId, String), String>>,
}

impl MemoryCrossReferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a mapping, last write wins.
    pub fn insert(&self, entry: CrossReferenceEntry) {
        self.mappings
            .write()
            .insert((entry.tenant, entry.foreign_key), entry.internal_key);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.read().is_empty()
    }
}

#[async_trait]
impl CrossReferenceStore for MemoryCrossReferences {
    async fn find_mapping(
        &self,
        tenant: &TenantId,
        foreign_key: &str,
    ) -> Result<Option<String>> {
        let mappings = self.mappings.read();
        Ok(mappings
            .get(&(tenant.clone(), foreign_key.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> TenantId {
        TenantId::new("acme")
    }

    #[tokio::test]
    async fn test_find_matches_key_and_name() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&tenant(), CatalogEntry::new("WID-001", "Industrial Widget"));
        catalog.insert(&tenant(), CatalogEntry::new("GLV-medium", "Safety Gloves (M)"));

        let by_key = catalog
            .find_by_key_or_name(&tenant(), "wid-001", 20)
            .await
            .unwrap();
        assert_eq!(by_key.len(), 1);
        assert_eq!(by_key[0].key, "WID-001");

        let by_name = catalog
            .find_by_key_or_name(&tenant(), "gloves", 20)
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].key, "GLV-medium");
    }

    #[tokio::test]
    async fn test_find_respects_limit() {
        let catalog = MemoryCatalog::new();
        for i in 0..30 {
            catalog.insert(
                &tenant(),
                CatalogEntry::new(format!("WID-{i:03}"), "Industrial Widget"),
            );
        }
        let results = catalog
            .find_by_key_or_name(&tenant(), "widget", 20)
            .await
            .unwrap();
        assert_eq!(results.len(), 20);
    }

    #[tokio::test]
    async fn test_tenants_are_isolated() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&tenant(), CatalogEntry::new("WID-001", "Industrial Widget"));

        let other = TenantId::new("other");
        assert!(catalog.get_by_key(&other, "WID-001").await.unwrap().is_none());
        assert!(catalog
            .find_by_key_or_name(&other, "widget", 20)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_by_key_is_case_insensitive() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&tenant(), CatalogEntry::new("WID-001", "Industrial Widget"));
        let entry = catalog.get_by_key(&tenant(), "wid-001").await.unwrap();
        assert!(entry.is_some());
    }

    #[tokio::test]
    async fn test_same_key_replaces_entry() {
        let catalog = MemoryCatalog::new();
        catalog.insert(&tenant(), CatalogEntry::new("WID-001", "Old Name"));
        catalog.insert(&tenant(), CatalogEntry::new("WID-001", "New Name"));

        assert_eq!(catalog.count(&tenant()), 1);
        let entry = catalog.get_by_key(&tenant(), "WID-001").await.unwrap().unwrap();
        assert_eq!(entry.name, "New Name");
    }

    #[tokio::test]
    async fn test_cross_reference_last_write_wins() {
        let xrefs = MemoryCrossReferences::new();
        xrefs.insert(CrossReferenceEntry::new(tenant(), "COMP-99", "WID-001"));
        xrefs.insert(CrossReferenceEntry::new(tenant(), "COMP-99", "WID-002"));

        let mapped = xrefs.find_mapping(&tenant(), "COMP-99").await.unwrap();
        assert_eq!(mapped.as_deref(), Some("WID-002"));
        assert_eq!(xrefs.len(), 1);
    }

    #[tokio::test]
    async fn test_cross_reference_is_case_sensitive() {
        let xrefs = MemoryCrossReferences::new();
        xrefs.insert(CrossReferenceEntry::new(tenant(), "COMP-99", "WID-001"));
        assert!(xrefs.find_mapping(&tenant(), "comp-99").await.unwrap().is_none());
    }
}
