//! Error responses
//!
//! Terminal conversion of [`AppError`] into the JSON envelope.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::app_error::AppError;
use crate::response::ApiResponse;

static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(false);

/// Include the error's source chain (`stack`) in response bodies.
///
/// Set once at startup; enabled outside production.
pub fn expose_error_details(enabled: bool) {
    EXPOSE_DETAILS.store(enabled, Ordering::Relaxed);
}

fn error_details_exposed() -> bool {
    EXPOSE_DETAILS.load(Ordering::Relaxed)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let chain = self.source_chain();
        let envelope = ApiResponse::failure(self.message().to_owned(), self.field_errors().to_vec());

        let mut body = match serde_json::to_value(&envelope) {
            Ok(body) => body,
            Err(_) => serde_json::json!({ "success": false, "message": self.kind().as_str() }),
        };

        if error_details_exposed() && !chain.is_empty() {
            body["stack"] = serde_json::Value::from(chain);
        }

        (status, Json(body)).into_response()
    }
}
