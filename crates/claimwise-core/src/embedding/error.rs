use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("embedding service returned a malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("embedding service returned an empty vector")]
    EmptyEmbedding,

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
