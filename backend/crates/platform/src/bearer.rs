//! Bearer Token Middleware
//!
//! Gate for protected routes. Missing or malformed `Authorization` headers
//! are rejected with 401; tokens that fail verification with 403. The
//! handler only runs once a token has been verified, and can pick up the
//! caller through the [`AuthenticatedUser`] extractor.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use kernel::error::app_error::AppError;
use kernel::id::UserId;

use crate::token::TokenKeys;

const BEARER_PREFIX: &str = "Bearer ";

/// Caller identity derived from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state(keys, require_bearer)`.
pub async fn require_bearer(
    State(keys): State<Arc<TokenKeys>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer(req.headers())
        .ok_or_else(|| AppError::unauthorized("Access token required"))?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::forbidden("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id(),
    });

    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| AppError::unauthorized("Access token required"))
    }
}
