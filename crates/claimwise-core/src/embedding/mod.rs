//! Text embedding collaborator.
//!
//! The retrieval core treats embedding as an opaque function from text to an
//! L2-normalized vector of fixed dimension. [`TextEmbedder`] is that seam;
//! [`Embedder`] is the shipped implementation with two backends: a remote
//! HTTP service (Ollama-style `/api/embeddings`) and a deterministic hashed
//! backend for offline operation and tests.

mod error;
mod remote;


pub use error::EmbeddingError;

use async_trait::async_trait;
use tracing::{debug, warn};

/// Output dimension of the hashed backend.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Opaque embedding function: text in, unit-norm vector out.
///
/// The dimension is fixed per instance for the process lifetime; callers
/// discover it from the first vector returned.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embeds a single string.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds a batch of strings, preserving order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Opaque model identifier, as configured.
    fn model_id(&self) -> &str;

    /// Short backend label for readiness reporting.
    fn backend_kind(&self) -> &'static str {
        "custom"
    }
}

enum EmbedderBackend {
    Remote(remote::RemoteClient),
    Hashed { dim: usize },
}

/// Embedding generator with remote and hashed backends.
pub struct Embedder {
    backend: EmbedderBackend,
    model_id: String,
}

impl std::fmt::Debug for Embedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Embedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Remote(client) => format!("Remote({})", client.base_url()),
                    EmbedderBackend::Hashed { dim } => format!("Hashed(dim={dim})"),
                },
            )
            .field("model_id", &self.model_id)
            .finish()
    }
}

impl Embedder {
    /// Creates an embedder backed by a remote embedding service.
    pub fn remote(base_url: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            backend: EmbedderBackend::Remote(remote::RemoteClient::new(base_url.into())),
            model_id: model_id.into(),
        }
    }

    /// Creates a deterministic hashed embedder of the given dimension.
    ///
    /// Vectors are seeded from a hash of the input text, so equal inputs
    /// always embed identically within a process and across processes.
    pub fn hashed(dim: usize, model_id: impl Into<String>) -> Self {
        Self {
            backend: EmbedderBackend::Hashed { dim },
            model_id: model_id.into(),
        }
    }

    /// Returns `true` when no network call is involved.
    pub fn is_local(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Hashed { .. })
    }

    fn embed_hashed(&self, text: &str, dim: usize) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "generating hashed embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(dim);
        let mut state = seed;

        for _ in 0..dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(&mut embedding);
        embedding
    }
}

#[async_trait]
impl TextEmbedder for Embedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Remote(client) => {
                let mut embedding = client.embed(&self.model_id, text).await?;
                if embedding.is_empty() {
                    return Err(EmbeddingError::EmptyEmbedding);
                }
                // The service is expected to normalize; re-normalize in case
                // a backend returns raw vectors.
                normalize(&mut embedding);
                Ok(embedding)
            }
            EmbedderBackend::Hashed { dim } => Ok(self.embed_hashed(text, *dim)),
        }
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        // Remote services in this contract take one prompt per request, so
        // the batch is a sequential loop either way.
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn backend_kind(&self) -> &'static str {
        match self.backend {
            EmbedderBackend::Remote(_) => "remote",
            EmbedderBackend::Hashed { .. } => "hashed",
        }
    }
}

fn normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in embedding.iter_mut() {
            *x /= norm;
        }
    } else {
        warn!("embedding has zero norm, leaving unnormalized");
    }
}
