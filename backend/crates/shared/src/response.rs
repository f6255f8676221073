//! Response Envelope
//!
//! Every response body, success or failure, has the same outer shape:
//! `{ success, message?, data?, errors? }`.

use serde::Serialize;
use std::borrow::Cow;

use crate::validation::FieldError;

/// Uniform JSON envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<Cow<'static, str>>, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors: (!errors.is_empty()).then_some(errors),
        }
    }
}
