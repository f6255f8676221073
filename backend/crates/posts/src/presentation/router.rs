//! Posts Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use platform::{TokenKeys, require_bearer};
use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository, tokens: Arc<TokenKeys>) -> Router {
    posts_router_generic(repo, tokens)
}

/// Create a generic Posts router for any repository implementation
///
/// Reads are public; create, update and delete sit behind the bearer-token
/// middleware.
pub fn posts_router_generic<R>(repo: R, tokens: Arc<TokenKeys>) -> Router
where
    R: PostRepository + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };
    let auth = from_fn_with_state(tokens, require_bearer);

    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<R>)
                .merge(post(handlers::create_post::<R>).route_layer(auth.clone())),
        )
        .route("/user/{user_id}", get(handlers::list_user_posts::<R>))
        .route(
            "/{id}",
            get(handlers::get_post::<R>).merge(
                put(handlers::update_post::<R>)
                    .delete(handlers::delete_post::<R>)
                    .route_layer(auth),
            ),
        )
        .with_state(state)
}
