//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{Email, PersonName, UserPassword};

/// User entity
///
/// Created on registration; never updated or deleted through the API.
#[derive(Debug, Clone)]
pub struct User {
    /// UUID v4 identifier
    pub user_id: UserId,
    /// Unique, lower-cased login email
    pub email: Email,
    /// Argon2id hash
    pub password: UserPassword,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Inactive accounts cannot sign in
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, active user
    pub fn new(
        email: Email,
        password: UserPassword,
        first_name: PersonName,
        last_name: PersonName,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password,
            first_name,
            last_name,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if user can sign in
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}
