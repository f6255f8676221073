//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use platform::{TokenKeys, require_bearer};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, tokens: Arc<TokenKeys>, config: AuthConfig) -> Router {
    auth_router_generic(repo, tokens, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, tokens: Arc<TokenKeys>, config: AuthConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route(
            "/me",
            get(handlers::me::<R>).route_layer(from_fn_with_state(tokens, require_bearer)),
        )
        .with_state(state)
}
