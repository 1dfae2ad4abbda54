use super::*;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::embedding::{Embedder, EmbeddingError, TextEmbedder};

/// Embedder returning pre-seeded vectors keyed by text.
struct FixedEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl FixedEmbedder {
    fn new(entries: &[(&str, Vec<f32>)]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl TextEmbedder for FixedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or(EmbeddingError::EmptyEmbedding)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }

    fn model_id(&self) -> &str {
        "fixed"
    }
}

struct FailingEmbedder;

#[async_trait]
impl TextEmbedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::RequestFailed {
            url: "http://localhost:11434/api/embeddings".to_string(),
            reason: "connection refused".to_string(),
        })
    }

    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::RequestFailed {
            url: "http://localhost:11434/api/embeddings".to_string(),
            reason: "connection refused".to_string(),
        })
    }

    fn model_id(&self) -> &str {
        "failing"
    }
}

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn index_length_matches_corpus_length() {
    let embedder = Embedder::hashed(64, "test-model");
    let corpus = texts(&["one", "two", "three", "four"]);

    let index = VectorIndex::build(&corpus, &embedder).await.unwrap();

    assert_eq!(index.len(), corpus.len());
    assert_eq!(index.dim(), 64);
    assert!(!index.is_empty());
}

#[tokio::test]
async fn empty_corpus_is_rejected() {
    let embedder = Embedder::hashed(64, "test-model");

    let err = VectorIndex::build(&[], &embedder).await.unwrap_err();

    assert!(matches!(err, IndexInitError::EmptyCorpus));
}

#[tokio::test]
async fn embedder_failure_propagates() {
    let corpus = texts(&["one"]);

    let err = VectorIndex::build(&corpus, &FailingEmbedder).await.unwrap_err();

    assert!(matches!(err, IndexInitError::Embedding(_)));
}

#[tokio::test]
async fn mixed_dimensions_are_rejected() {
    let embedder = FixedEmbedder::new(&[
        ("a", vec![1.0, 0.0]),
        ("b", vec![1.0, 0.0, 0.0]),
    ]);

    let err = VectorIndex::build(&texts(&["a", "b"]), &embedder)
        .await
        .unwrap_err();

    match err {
        IndexInitError::DimensionMismatch {
            position,
            expected,
            actual,
        } => {
            assert_eq!(position, 1);
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn search_orders_by_descending_score() {
    let embedder = FixedEmbedder::new(&[
        ("far", vec![0.0, 1.0]),
        ("near", vec![1.0, 0.0]),
        ("mid", vec![0.7071, 0.7071]),
    ]);
    let index = VectorIndex::build(&texts(&["far", "near", "mid"]), &embedder)
        .await
        .unwrap();

    let hits = index.search(&[1.0, 0.0], 3);

    let positions: Vec<_> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![1, 2, 0]);
    assert!(hits[0].score >= hits[1].score);
    assert!(hits[1].score >= hits[2].score);
}

#[tokio::test]
async fn equal_scores_order_by_ascending_position() {
    let embedder = FixedEmbedder::new(&[
        ("a", vec![1.0, 0.0]),
        ("b", vec![1.0, 0.0]),
        ("c", vec![1.0, 0.0]),
    ]);
    let index = VectorIndex::build(&texts(&["a", "b", "c"]), &embedder)
        .await
        .unwrap();

    let hits = index.search(&[1.0, 0.0], 3);

    let positions: Vec<_> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[tokio::test]
async fn search_truncates_to_k() {
    let embedder = Embedder::hashed(16, "test-model");
    let corpus = texts(&["one", "two", "three", "four", "five"]);
    let index = VectorIndex::build(&corpus, &embedder).await.unwrap();

    let query = embedder.embed("one").await.unwrap();

    assert_eq!(index.search(&query, 2).len(), 2);
    // k larger than the corpus caps at corpus size.
    assert_eq!(index.search(&query, 100).len(), 5);
}

#[tokio::test]
async fn wrong_dimension_query_returns_no_hits() {
    let embedder = Embedder::hashed(16, "test-model");
    let index = VectorIndex::build(&texts(&["one"]), &embedder).await.unwrap();

    assert!(index.search(&[1.0, 0.0], 3).is_empty());
}

#[tokio::test]
async fn identical_text_is_its_own_best_match() {
    let embedder = Embedder::hashed(64, "test-model");
    let corpus = texts(&["alpha", "beta", "gamma"]);
    let index = VectorIndex::build(&corpus, &embedder).await.unwrap();

    let query = embedder.embed("beta").await.unwrap();
    let hits = index.search(&query, 1);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 1);
    assert!((hits[0].score - 1.0).abs() < 1e-5);
}
