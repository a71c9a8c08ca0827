//! Query term normalization.
//!
//! Cleans raw identifier/description strings before they reach the matching
//! tiers: case folding, whitespace trimming, and token extraction for
//! lightweight text search. Pure functions, no failure modes; empty or
//! whitespace-only input yields empty output.

use smallvec::SmallVec;

/// Maximum number of description tokens fed into a store search query.
/// Caps query cost and mirrors how a human skims a short description.
pub const MAX_DESCRIPTION_TOKENS: usize = 3;

/// Tokens at or below this length are too ambiguous to match on.
pub const MIN_TOKEN_LEN: usize = 2;

/// Trim surrounding whitespace, preserving case.
///
/// Cross-reference lookups use this form: foreign part identifiers are
/// often case-sensitive.
#[inline]
#[must_use]
pub fn trimmed(raw: &str) -> &str {
    raw.trim()
}

/// Normalize an identifier for case-insensitive comparison: trim and
/// lowercase.
#[inline]
#[must_use]
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a description for containment comparison: trim and lowercase.
#[inline]
#[must_use]
pub fn normalize_description(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Extract up to [`MAX_DESCRIPTION_TOKENS`] search tokens from a free-text
/// description.
///
/// Splits on whitespace and punctuation, keeps alphanumeric tokens longer
/// than [`MIN_TOKEN_LEN`] characters, lowercased.
#[must_use]
pub fn description_tokens(raw: &str) -> SmallVec<[String; MAX_DESCRIPTION_TOKENS]> {
    let lowered = raw.to_lowercase();
    lowered
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|t| t.chars().count() > MIN_TOKEN_LEN && t.chars().all(char::is_alphanumeric))
        .take(MAX_DESCRIPTION_TOKENS)
        .map(str::to_string)
        .collect()
}

/// Join extracted tokens into the space-separated phrase submitted to the
/// catalog store's text search.
#[inline]
#[must_use]
pub fn search_phrase(tokens: &[String]) -> String {
    tokens.join(" ")
}
