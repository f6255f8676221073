//! Field Validation
//!
//! Collects per-field validation failures so a request can report every
//! problem at once instead of stopping at the first one.

use serde::Serialize;
use std::borrow::Cow;

use crate::error::app_error::{AppError, AppResult};

/// A single invalid input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulator for [`FieldError`]s
///
/// ## Examples
/// ```rust
/// use kernel::validation::FieldErrors;
/// use kernel::error::app_error::AppError;
///
/// let mut errors = FieldErrors::new();
/// let title: Option<String> = errors.capture("title", Err(AppError::bad_request("Title is required")));
/// assert!(title.is_none());
/// assert!(errors.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`
    pub fn push(&mut self, field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Keep the value on success, record the error message under `field` on failure
    pub fn capture<T>(&mut self, field: &'static str, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(field, err.message().to_owned());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise a 400 carrying every field error
    pub fn finish(self) -> AppResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.0))
        }
    }
}

impl From<FieldErrors> for Vec<FieldError> {
    fn from(errors: FieldErrors) -> Self {
        errors.0
    }
}
