//! HTTP gateway (Axum) for the hybrid retrieval engine.
//!
//! This module is primarily used by the `claimwise` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::query_handler;
pub use state::HandlerState;

use claimwise::embedding::TextEmbedder;
use claimwise::engine::Readiness;

const STATUS_LOADED: &str = "loaded";
const STATUS_UNAVAILABLE: &str = "unavailable";

pub fn create_router_with_state<E>(state: HandlerState<E>) -> Router
where
    E: TextEmbedder + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/query", post(query_handler))
        .layer(TraceLayer::new_for_http())
        // The gateway is consumed by a browser front end on another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub denial_table: &'static str,
    pub member_table: &'static str,
    pub plan_table: &'static str,
    pub index: &'static str,
    pub embedder: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "online" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<E>(State(state): State<HandlerState<E>>) -> Response
where
    E: TextEmbedder + 'static,
{
    let engine = &state.engine;
    let tables = engine.tables();

    let table_status = |loaded: bool| {
        if loaded {
            STATUS_LOADED
        } else {
            STATUS_UNAVAILABLE
        }
    };

    let readiness = engine.readiness();
    let components = ComponentStatus {
        http: "ready",
        denial_table: table_status(tables.denials.is_some()),
        member_table: table_status(tables.members.is_some()),
        plan_table: table_status(tables.plans.is_some()),
        index: if readiness.is_ready() {
            "ready"
        } else {
            STATUS_UNAVAILABLE
        },
        embedder: engine.embedder().backend_kind(),
    };

    let status_code = match readiness {
        Readiness::Ready => StatusCode::OK,
        Readiness::Degraded | Readiness::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status_code,
        Json(ReadyResponse {
            status: readiness.as_str(),
            components,
        }),
    )
        .into_response()
}
