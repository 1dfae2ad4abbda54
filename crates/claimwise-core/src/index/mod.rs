//! Vector Index: exhaustive nearest-neighbor search over the corpus.
//!
//! The index is a flat buffer of L2-normalized embeddings built once from
//! the corpus; position `i` joins back to document `i`. It is never mutated
//! after build, so searches take `&self` and need no locking.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::IndexInitError;

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::embedding::TextEmbedder;

/// Default retrieval width (tunable via configuration).
pub const DEFAULT_TOP_K: usize = 3;

/// One search result: similarity score plus corpus position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub score: f32,
    pub position: usize,
}

/// Immutable exhaustive-scan similarity index.
#[derive(Debug)]
pub struct VectorIndex {
    dim: usize,
    // len() * dim values, row-major, one normalized embedding per document.
    vectors: Vec<f32>,
    len: usize,
}

impl VectorIndex {
    /// Embeds `texts` in order and builds the index.
    ///
    /// Fails on an empty corpus or any embedding failure; every vector must
    /// share the dimension of the first. On success the invariant
    /// `index.len() == texts.len()` holds for the life of the index.
    pub async fn build<E: TextEmbedder>(
        texts: &[String],
        embedder: &E,
    ) -> Result<Self, IndexInitError> {
        if texts.is_empty() {
            return Err(IndexInitError::EmptyCorpus);
        }

        let embeddings = embedder.embed_batch(texts).await?;
        if embeddings.len() != texts.len() {
            return Err(IndexInitError::CountMismatch {
                expected: texts.len(),
                actual: embeddings.len(),
            });
        }

        let dim = embeddings[0].len();
        let mut vectors = Vec::with_capacity(texts.len() * dim);

        for (position, embedding) in embeddings.iter().enumerate() {
            if embedding.len() != dim {
                return Err(IndexInitError::DimensionMismatch {
                    position,
                    expected: dim,
                    actual: embedding.len(),
                });
            }
            vectors.extend_from_slice(embedding);
        }

        debug!(documents = texts.len(), dim, "vector index built");

        Ok(Self {
            dim,
            vectors,
            len: texts.len(),
        })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Embedding dimension `D` fixed at build time.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns up to `k` hits sorted by descending inner-product score,
    /// ties broken by ascending corpus position.
    ///
    /// Vectors are unit-norm, so inner product equals cosine similarity.
    /// This is an exhaustive scan: O(len * dim) per query, which is the
    /// intended trade at corpus sizes of a few thousand documents. A query
    /// of the wrong dimension returns no hits rather than erroring.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<SearchHit> {
        if query.len() != self.dim {
            warn!(
                expected = self.dim,
                actual = query.len(),
                "query dimension mismatch, returning no hits"
            );
            return vec![];
        }

        let mut hits: Vec<SearchHit> = self
            .vectors
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(position, vector)| SearchHit {
                score: inner_product(query, vector),
                position,
            })
            .collect();

        // Stable sort over ascending-position input: equal scores keep
        // ascending position order.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(k);
        hits
    }
}

fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
