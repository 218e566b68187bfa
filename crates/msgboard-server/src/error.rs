//! Error types for the message board HTTP layer.
//!
//! [`ApiError`] covers request-level failures and converts into an Axum
//! HTTP response via its [`IntoResponse`](axum::response::IntoResponse)
//! implementation. The message log itself never fails; only malformed
//! requests end up here.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur while handling a board request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `/new` parameters could not be decoded.
    #[error("invalid form: {0}")]
    InvalidForm(#[from] FormRejection),

    /// The `/new` query string could not be decoded.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidForm(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::InvalidQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
