//! Axum router wiring.
//!
//! Exact method + path matches only; unknown paths fall through to a 404.
//! axum answers HEAD with the GET handler, so matched routes reject it here
//! to keep HEAD from being counted as a hit.

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ops::ROOT_PATH, get(ops::root))
        .route(ops::HEALTHZ_PATH, get(ops::healthz))
        .route(ops::METRICS_PATH, get(ops::metrics))
        .route_layer(middleware::from_fn(get_only))
        .fallback(ops::not_found)
        .with_state(state)
}

async fn get_only(req: Request, next: Next) -> Response {
    if req.method() == Method::HEAD {
        tracing::debug!(path = %req.uri().path(), "HEAD rejected");
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")]).into_response();
    }
    next.run(req).await
}
