//! Person Name Value Object
//!
//! First or last name of a user.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;

pub const PERSON_NAME_MAX_LENGTH: usize = 50;

/// Which part of the name is being validated (for messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Last,
}

impl NamePart {
    fn label(self) -> &'static str {
        match self {
            NamePart::First => "First name",
            NamePart::Last => "Last name",
        }
    }
}

/// Trimmed, non-empty name of bounded length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(part: NamePart, value: impl AsRef<str>) -> AppResult<Self> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(AppError::bad_request(format!("{} is required", part.label())));
        }

        if value.chars().count() > PERSON_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "{} must be at most {} characters",
                part.label(),
                PERSON_NAME_MAX_LENGTH
            )));
        }

        if value.chars().any(char::is_control) {
            return Err(AppError::bad_request(format!(
                "{} contains invalid characters",
                part.label()
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        let name = PersonName::new(NamePart::First, "  Ada ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn test_required() {
        let err = PersonName::new(NamePart::Last, "   ").unwrap_err();
        assert_eq!(err.message(), "Last name is required");
    }

    #[test]
    fn test_max_length() {
        assert!(PersonName::new(NamePart::First, "a".repeat(PERSON_NAME_MAX_LENGTH)).is_ok());
        let err = PersonName::new(NamePart::First, "a".repeat(PERSON_NAME_MAX_LENGTH + 1)).unwrap_err();
        assert_eq!(err.message(), "First name must be at most 50 characters");
    }

    #[test]
    fn test_unicode_counts_characters() {
        assert!(PersonName::new(NamePart::First, "é".repeat(PERSON_NAME_MAX_LENGTH)).is_ok());
    }
}
