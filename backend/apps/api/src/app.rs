//! HTTP application wiring
//!
//! `build_app` is the single place the router is assembled; `main` passes
//! PostgreSQL repositories and tests pass in-memory ones.

use std::sync::Arc;

use auth::{AuthConfig, UserRepository, auth_router_generic};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use platform::TokenKeys;
use posts::{PostRepository, posts_router_generic};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::health::health_router;
use crate::security::{cors_layer, with_security_headers};

/// Maximum accepted request body
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Build the full HTTP router
pub fn build_app<U, P>(users: U, posts: P, config: &AppConfig) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenKeys::new(config.jwt_secret.as_bytes(), config.jwt_ttl));
    let auth_config = AuthConfig {
        password_pepper: config.password_pepper.as_ref().map(|p| p.as_bytes().to_vec()),
    };

    let api = Router::new()
        .nest("/auth", auth_router_generic(users, tokens.clone(), auth_config))
        .nest("/posts", posts_router_generic(posts, tokens))
        .merge(health_router(config.environment));

    let app = Router::new()
        .nest("/api", api)
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    with_security_headers(app)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

async fn method_not_allowed() -> AppError {
    AppError::new(ErrorKind::MethodNotAllowed, "Method not allowed")
}
