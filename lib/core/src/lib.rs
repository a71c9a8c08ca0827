//! # partmatch Core
//!
//! Core library for the partmatch catalog matching engine.
//!
//! This crate provides the data model and pure building blocks shared by
//! the rest of the workspace:
//!
//! - [`CatalogEntry`] / [`CrossReferenceEntry`] - the read-only catalog
//!   data the engine matches against
//! - [`LineItemQuery`] / [`CandidateMatch`] / [`SuggestionResult`] - the
//!   caller-facing query and suggestion types
//! - [`normalize`] - query term normalization and token extraction
//! - [`MatchConfig`] - tunable thresholds, caps, timeouts and tier scores
//!
//! ## Example
//!
//! ```rust
//! use partmatch_core::{normalize, CatalogEntry, LineItemQuery};
//!
//! let entry = CatalogEntry::new("WID-001", "Industrial Widget");
//! let query = LineItemQuery::from_identifier("  WID-001 ");
//!
//! let needle = normalize::normalize_identifier(query.identifier.as_deref().unwrap());
//! assert_eq!(normalize::normalize_identifier(&entry.key), needle);
//! ```

pub mod candidate;
pub mod config;
pub mod entry;
pub mod error;
pub mod normalize;

pub use candidate::{CandidateMatch, LineItemQuery, MatchKind, SuggestionResult};
pub use config::{MatchConfig, TierScores};
pub use entry::{CatalogEntry, CatalogId, CrossReferenceEntry, TenantId};
pub use error::{Error, Result};
