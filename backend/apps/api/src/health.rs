//! Health Check

use axum::extract::State;
use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use kernel::response::ApiResponse;
use serde::Serialize;

use crate::config::Environment;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub environment: Environment,
}

/// GET /api/health
pub async fn health(State(environment): State<Environment>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "ok",
        timestamp: Utc::now(),
        environment,
    }))
}

pub fn health_router(environment: Environment) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(environment)
}
