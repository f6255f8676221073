//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Email already registered
    #[error("User with this email already exists")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account is disabled
    #[error("Account is disabled")]
    AccountDisabled,

    /// Input validation or other already-classified failure
    #[error(transparent)]
    App(#[from] AppError),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::AccountDisabled => ErrorKind::Forbidden,
            AuthError::App(e) => e.kind(),
            AuthError::Token(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Auth token error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = err.kind();
        match err {
            AuthError::App(e) => e,
            AuthError::Database(e) => AppError::from(e),
            AuthError::Token(e) => AppError::internal("Failed to issue token").with_source(e),
            AuthError::Internal(msg) => AppError::internal("Internal server error")
                .with_source(std::io::Error::other(msg)),
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
