//! HTTP endpoints.
//!
//! - `/`        : greeting
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format
//!
//! Every handler records its own hit before building the response.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hitcount_core::error::HitcountError;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::CONTENT_TYPE_TEXT;

pub const ROOT_PATH: &str = "/";
pub const HEALTHZ_PATH: &str = "/healthz";
pub const METRICS_PATH: &str = "/metrics";

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics().hit(ROOT_PATH);
    Json(json!({ "message": state.greeting() }))
}

pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics().hit(HEALTHZ_PATH);
    Json(json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let metrics = state.metrics();
    // Counted first so the snapshot includes this scrape.
    metrics.hit(METRICS_PATH);
    let body = metrics.render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
        body,
    )
        .into_response()
}

pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    HitcountError::NotFound(uri.path().to_string()).into()
}
