//! In-memory fakes for use-case tests

use std::sync::Arc;

use kernel::id::UserId;
use platform::{DEFAULT_TOKEN_TTL, TokenKeys};
use tokio::sync::RwLock;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, NamePart, PersonName, RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

pub fn tokens() -> Arc<TokenKeys> {
    Arc::new(TokenKeys::new(b"auth-test-secret", DEFAULT_TOKEN_TTL))
}

pub async fn seed_user(
    repo: &InMemoryUserRepository,
    email: &str,
    password: &str,
    is_active: bool,
) -> User {
    let raw = RawPassword::new(password.to_string()).unwrap();
    let mut user = User::new(
        Email::new(email).unwrap(),
        UserPassword::from_raw(&raw, None).unwrap(),
        PersonName::new(NamePart::First, "Test").unwrap(),
        PersonName::new(NamePart::Last, "User").unwrap(),
    );
    user.is_active = is_active;
    repo.create(&user).await.unwrap();
    user
}
