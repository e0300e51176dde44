//! HTTP mapping for the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hitcount_core::error::{ClientCode, HitcountError};

/// Response wrapper so handlers can return `HitcountError` directly.
#[derive(Debug)]
pub struct ApiError(pub HitcountError);

impl From<HitcountError> for ApiError {
    fn from(e: HitcountError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
