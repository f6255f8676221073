//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use kernel::validation::FieldErrors;
use platform::{IssuedToken, TokenKeys};

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, NamePart, PersonName, RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Register input (unvalidated)
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    pub token: IssuedToken,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenKeys>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenKeys>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let mut errors = FieldErrors::new();
        let email = errors.capture("email", Email::new(&input.email));
        let password = errors.capture("password", RawPassword::new(input.password));
        let first_name = errors.capture(
            "firstName",
            PersonName::new(NamePart::First, &input.first_name),
        );
        let last_name = errors.capture("lastName", PersonName::new(NamePart::Last, &input.last_name));
        errors.finish()?;

        let (Some(email), Some(password), Some(first_name), Some(last_name)) =
            (email, password, first_name, last_name)
        else {
            return Err(AuthError::Internal(
                "validated register fields missing".to_string(),
            ));
        };

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;
        let user = User::new(email, password_hash, first_name, last_name);

        // Insert still reports EmailTaken if a concurrent request won the race
        self.repo.create(&user).await?;

        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}
