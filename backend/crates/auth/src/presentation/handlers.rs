//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::ApiJson;
use kernel::response::ApiResponse;
use platform::{AuthenticatedUser, TokenKeys};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthPayload, LoginRequest, MePayload, RegisterRequest};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenKeys>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    let output = use_case.execute(input).await?;

    let payload = AuthPayload {
        user: (&output.user).into(),
        token: output.token.token,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(payload).with_message("User registered successfully")),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let payload = AuthPayload {
        user: (&output.user).into(),
        token: output.token.token,
    };

    Ok(Json(ApiResponse::success(payload).with_message("Login successful")))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    caller: AuthenticatedUser,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = CurrentUserUseCase::new(state.repo.clone())
        .execute(&caller.user_id)
        .await?;

    Ok(Json(ApiResponse::success(MePayload {
        user: (&user).into(),
    })))
}
