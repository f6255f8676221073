//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::User;
use crate::domain::value_object::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// Returns `AuthError::EmailTaken` when the email is already registered.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
