//! HTTP client for an Ollama-style embedding endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::EmbeddingError;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

pub(crate) struct RemoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub(crate) fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn embed(&self, model: &str, prompt: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/api/embeddings", self.base_url);

        debug!(%url, model, prompt_len = prompt.len(), "requesting remote embedding");

        let response = self
            .client
            .post(&url)
            .json(&EmbeddingRequest { model, prompt })
            .send()
            .await
            .map_err(|e| EmbeddingError::RequestFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::RequestFailed {
                url,
                reason: format!("status {status}"),
            });
        }

        let body: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        Ok(body.embedding)
    }
}
