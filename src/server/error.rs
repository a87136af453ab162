//! Error-to-HTTP response conversion.
//!
//! Every failure body carries a `message`. Schema failures also list the
//! offending fields under `details`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use highlights_common::Error;
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Server error in API handler");
        } else {
            tracing::debug!(status = %status, error = %self.0, "Client error in API handler");
        }

        let body = match self.0.schema_issues() {
            Some(issues) => json!({
                "message": self.0.to_string(),
                "details": issues,
            }),
            None => json!({ "message": self.0.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
