//! # partmatch Store
//!
//! Collaborator interfaces for the partmatch catalog matching engine,
//! plus in-memory reference implementations.
//!
//! The engine consumes four read-only collaborators, each behind an async
//! trait so deployments can substitute their own backends (and tests can
//! substitute fakes):
//!
//! - [`CatalogStore`] - keyed lookup and substring search over entries
//! - [`CrossReferenceStore`] - foreign-to-internal key mappings
//! - [`EmbeddingProvider`] - query text to fixed-dimension vectors
//! - [`VectorIndex`] - cosine nearest-neighbor search
//!
//! The bundled implementations ([`MemoryCatalog`], [`MemoryCrossReferences`],
//! [`HashEmbedder`], [`CosineIndex`]) are deterministic and dependency-free,
//! which is what the engine's test suite runs against.

pub mod embed;
pub mod index;
pub mod memory;
pub mod traits;

pub use embed::{HashEmbedder, DEFAULT_EMBED_DIM};
pub use index::{cosine_similarity, CosineIndex};
pub use memory::{MemoryCatalog, MemoryCrossReferences};
pub use traits::{CatalogStore, CrossReferenceStore, EmbeddingProvider, VectorIndex};
