use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum IndexInitError {
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    #[error("embedding the corpus failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("document {position} embedded to {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("embedder returned {actual} vectors for {expected} documents")]
    CountMismatch { expected: usize, actual: usize },
}
