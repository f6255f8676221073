//! Post Content Value Object

use kernel::error::app_error::{AppError, AppResult};

pub const POST_CONTENT_MAX_LENGTH: usize = 10_000;

/// Body text of a post
///
/// Whitespace is preserved. Blank input means "no content", which is why
/// [`PostContent::parse`] returns an `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Parse user input; blank input yields `Ok(None)`
    pub fn parse(content: impl Into<String>) -> AppResult<Option<Self>> {
        let content = content.into();

        if content.trim().is_empty() {
            return Ok(None);
        }

        if content.chars().count() > POST_CONTENT_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Content must be at most {} characters",
                POST_CONTENT_MAX_LENGTH
            )));
        }

        Ok(Some(Self(content)))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
