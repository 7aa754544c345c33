//! HTTP surface for the Yours Truly skill backend.
//!
//! One POST endpoint receives the platform's request envelope, runs the
//! skill, and returns the response envelope:
//! - `POST /` — request envelope in, response envelope out
//! - `GET /health` — liveness for load balancers and monitoring

pub mod config;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use truly_skill::Skill;
use truly_types::{RequestEnvelope, ResponseEnvelope};

/// Maximum request body size (2 MiB). Protects against OOM from oversized
/// payloads.
const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across all request handlers.
pub struct AppState {
    /// The skill entry point. Immutable after startup.
    pub skill: Skill,
}

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("upstream failure: {0}")]
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for `POST /`.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// malformed envelopes consistently map to a 400 with a JSON error body.
async fn skill_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: axum::body::Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let envelope: RequestEnvelope = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid request envelope: {e}")))?;

    let name = envelope.handler_name().to_string();
    let out = state.skill.handle(&envelope).await.map_err(|e| {
        tracing::warn!(name = %name, error = %e, "delegation call failed");
        ApiError::BadGateway(e.to_string())
    })?;

    Ok(Json(out))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", post(skill_handler))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}
