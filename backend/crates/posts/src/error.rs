//! Post Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type PostResult<T> = Result<T, PostError>;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    /// Caller is not the owner
    #[error("You do not have permission to modify this post")]
    NotOwner,

    #[error("At least one of title, content or isPublished must be provided")]
    NoChanges,

    #[error(transparent)]
    App(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound => ErrorKind::NotFound,
            PostError::NotOwner => ErrorKind::Forbidden,
            PostError::NoChanges => ErrorKind::BadRequest,
            PostError::App(e) => e.kind(),
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            PostError::Database(e) => tracing::error!(error = %e, "Post database error"),
            PostError::Internal(msg) => tracing::error!(message = %msg, "Post internal error"),
            PostError::NotOwner => tracing::warn!("Post modification by non-owner"),
            _ => tracing::debug!(error = %self, "Post error"),
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        let kind = err.kind();
        match err {
            PostError::App(e) => e,
            PostError::Database(e) => AppError::from(e),
            PostError::Internal(msg) => AppError::internal("Internal server error")
                .with_source(std::io::Error::other(msg)),
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::from(PostError::NotFound).status_code(), 404);
        assert_eq!(AppError::from(PostError::NotOwner).status_code(), 403);
        assert_eq!(AppError::from(PostError::NoChanges).status_code(), 400);
        assert_eq!(AppError::from(PostError::NotFound).message(), "Post not found");
    }
}
