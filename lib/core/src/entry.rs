use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Isolation scope for catalog and cross-reference lookups.
///
/// All store queries are confined to a single tenant; entries from one
/// tenant are never visible to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(String);

impl TenantId {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identity of a catalog entry.
///
/// This is the dedup key across matching tiers: the first tier to claim
/// a `CatalogId` for a query owns the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogId(Uuid);

impl CatalogId {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CatalogId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CatalogId {
    fn from(u: Uuid) -> Self {
        Self(u)
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sellable item in the distributor's own catalog.
///
/// `key` is the internal stocking identifier, unique within a tenant.
/// `embedding` is present only if semantic indexing has run for the entry;
/// when present its dimensionality is fixed by the embedding provider.
/// Entries are read-only to the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub catalog_id: CatalogId,
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl CatalogEntry {
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            catalog_id: CatalogId::new(),
            key: key.into(),
            name: name.into(),
            unit_price: None,
            category: None,
            supplier: None,
            embedding: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_unit_price(mut self, price: Decimal) -> Self {
        self.unit_price = Some(price);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }
}

/// A stored mapping from a foreign/competitor part identifier to an
/// internal catalog key.
///
/// At most one `internal_key` exists per (tenant, foreign_key) pair;
/// stores resolve conflicting imports as last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceEntry {
    pub tenant: TenantId,
    pub foreign_key: String,
    pub internal_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_name: Option<String>,
}

impl CrossReferenceEntry {
    #[inline]
    #[must_use]
    pub fn new(
        tenant: TenantId,
        foreign_key: impl Into<String>,
        internal_key: impl Into<String>,
    ) -> Self {
        Self {
            tenant,
            foreign_key: foreign_key.into(),
            internal_key: internal_key.into(),
            foreign_name: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_foreign_name(mut self, name: impl Into<String>) -> Self {
        self.foreign_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = CatalogEntry::new("WID-001", "Industrial Widget")
            .with_category("widgets")
            .with_unit_price(Decimal::new(1299, 2));

        assert_eq!(entry.key, "WID-001");
        assert_eq!(entry.category.as_deref(), Some("widgets"));
        assert_eq!(entry.unit_price, Some(Decimal::new(1299, 2)));
        assert!(entry.embedding.is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let a = CatalogEntry::new("A", "a");
        let b = CatalogEntry::new("A", "a");
        assert_ne!(a.catalog_id, b.catalog_id);
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let entry = CatalogEntry::new("WID-001", "Industrial Widget");
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("unit_price").is_none());
        assert!(json.get("embedding").is_none());
    }
}
