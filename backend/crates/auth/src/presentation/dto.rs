//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Missing fields deserialize as empty strings so they surface as
/// field-level validation errors rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of a user (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            email: user.email.as_str().to_owned(),
            first_name: user.first_name.as_str().to_owned(),
            last_name: user.last_name.as_str().to_owned(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register / login payload
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub user: UserResponse,
    pub token: String,
}

/// Current user payload
#[derive(Debug, Clone, Serialize)]
pub struct MePayload {
    pub user: UserResponse,
}
