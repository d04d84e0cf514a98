//! HTTP gateway (Axum) for search and evaluation.
//!
//! This module is primarily used by the `bizmatch` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::{evaluate_handler, search_handler};
pub use state::HandlerState;

pub const STATUS_READY: &str = "ready";
pub const STATUS_MISSING: &str = "missing";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/api/search", post(search_handler))
        .route("/api/evaluate", post(evaluate_handler))
        .layer(TraceLayer::new_for_http())
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
    pub catalog: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let catalog_status = if state.catalog_source.is_available() {
        STATUS_READY
    } else {
        STATUS_MISSING
    };

    let components = ComponentStatus {
        http: STATUS_READY,
        catalog: catalog_status,
    };

    let is_ready = components.catalog == STATUS_READY;
    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready { "ok" } else { "pending" };

    (
        status_code,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
