//! Current User Use Case
//!
//! Resolves the user behind a verified bearer token.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The token may outlive the account, so absence is a 404
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
