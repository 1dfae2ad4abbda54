use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use claimwise::embedding::TextEmbedder;
use claimwise::engine::CLAIMWISE_SOURCE_HEADER;

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;

/// Wire shape of `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
    #[serde(rename = "type")]
    pub query_type: Option<String>,
}

/// Answers one free-text query.
///
/// A missing or blank `query` field is a caller error (400); everything
/// else returns 200 with the engine's `{success, response, source}` shape
/// and the answer source mirrored into the `X-Claimwise-Source` header.
#[instrument(skip(state, request))]
pub async fn query_handler<E>(
    State(state): State<HandlerState<E>>,
    Json(request): Json<QueryRequest>,
) -> Result<Response, GatewayError>
where
    E: TextEmbedder + 'static,
{
    let query = request.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(GatewayError::MissingQuery);
    }

    debug!(query_len = query.len(), hint = ?request.query_type, "processing query");

    let result = state
        .engine
        .query(query, request.query_type.as_deref())
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        CLAIMWISE_SOURCE_HEADER,
        HeaderValue::from_static(result.source.as_header_value()),
    );

    Ok((StatusCode::OK, headers, Json(result)).into_response())
}
