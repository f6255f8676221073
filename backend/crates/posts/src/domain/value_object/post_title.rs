//! Post Title Value Object

use kernel::error::app_error::{AppError, AppResult};

pub const POST_TITLE_MAX_LENGTH: usize = 255;

/// Trimmed, non-empty post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(title: impl AsRef<str>) -> AppResult<Self> {
        let title = title.as_ref().trim();

        if title.is_empty() {
            return Err(AppError::bad_request("Title is required"));
        }

        if title.chars().count() > POST_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                POST_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
