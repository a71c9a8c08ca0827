//! Deterministic hash-based embedding provider.
//!
//! Maps trigrams and whole words onto positions of a fixed-dimension
//! vector, then normalizes to unit length. No model download, no network:
//! the same text always produces the same vector, which makes it the
//! reference provider for tests and an offline fallback for small
//! deployments.

use crate::traits::EmbeddingProvider;
use async_trait::async_trait;
use partmatch_core::{Error, Result};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Default embedding dimension.
pub const DEFAULT_EMBED_DIM: usize = 64;

/// Trigram/word hashing embedder.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::Embedding("embedding dimension must be non-zero".into()));
        }
        Ok(Self { dim })
    }

    /// Embed synchronously; the trait impl delegates here.
    #[must_use]
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];
        let normalized = text.to_lowercase();

        for trigram in trigrams(&normalized) {
            let pos = bucket(&trigram, self.dim);
            vector[pos] += 1.0;
        }

        // Whole words carry more signal than character trigrams.
        for word in normalized.split_whitespace() {
            let pos = bucket(word, self.dim);
            vector[pos] += 2.0;
        }

        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }

        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dim: DEFAULT_EMBED_DIM,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    fn dimension(&self) -> usize {
        self.dim
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vectorize(text))
    }
}

fn bucket(token: &str, dim: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    (hasher.finish() as usize) % dim
}

/// Character trigrams over the padded input.
fn trigrams(s: &str) -> HashSet<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return HashSet::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
