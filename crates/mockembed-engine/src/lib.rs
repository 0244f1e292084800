//! # mockembed-engine
//!
//! The "narrow waist" of the mockembed stack. Defines the core [`Embedder`]
//! trait and the deterministic [`HashEmbedder`] that backs the mock service.
//! The HTTP layer depends on the trait, so a real model backend could be
//! swapped in without touching the server code.
//!
//! ## Design Notes
//!
//! ### Determinism
//! `HashEmbedder` derives every vector from the SHA-256 digest of the input
//! text: identical text always yields a bit-identical vector. There is no
//! model state, no RNG, and no I/O.
//!
//! ### Vector Element Type
//! Vectors are `f64`, matching the wire contract. Consistent IEEE-754 double
//! precision is part of the reproducibility guarantee.

use sha2::{Digest, Sha256};

pub type Result<T> = std::result::Result<T, EmbedError>;

/// Number of elements in every produced vector.
pub const EMBEDDING_DIM: usize = 64;

/// Top-level error type for embedding operations.
///
/// [`HashEmbedder`] itself never fails; the variant exists for fallible
/// backends plugged in through [`Embedder`].
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("embedding backend failed: {0}")]
    Backend(String),
}

/// The core embedder trait — everything else plugs into this.
///
/// Methods take `&self` so one instance can serve concurrent requests.
/// Implementations must be stateless or internally synchronized.
pub trait Embedder: Send + Sync {
    /// Produce the vector for a single text.
    fn embed(&self, text: &str) -> Result<Vec<f64>>;

    /// Produce vectors for a batch of texts, preserving input order.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f64>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Number of elements in every vector this embedder produces.
    fn dimension(&self) -> usize;
}

/// Deterministic embedder: maps text to a fixed-length vector via SHA-256.
///
/// For index `i` in `0..EMBEDDING_DIM`, the digest byte at `i % 32` is
/// scaled from `0..=255` into `[-1.0, 1.0]`:
///
/// ```text
/// value = (byte / 255.0) * 2.0 - 1.0
/// ```
///
/// The digest is 32 bytes and the vector 64 elements, so the second half of
/// every vector repeats the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEmbedder;

impl HashEmbedder {
    pub fn new() -> Self {
        Self
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let digest = Sha256::digest(text.as_bytes());
        let vector = (0..EMBEDDING_DIM)
            .map(|i| {
                let b = digest[i % digest.len()];
                (b as f64 / 255.0) * 2.0 - 1.0
            })
            .collect();
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }
}
