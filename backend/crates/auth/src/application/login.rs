//! Login Use Case
//!
//! Authenticates a user by email and password and issues a bearer token.

use std::sync::Arc;

use kernel::validation::FieldErrors;
use platform::{IssuedToken, TokenKeys};

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input (unvalidated)
#[derive(Debug, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: IssuedToken,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenKeys>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let mut errors = FieldErrors::new();
        let email = errors.capture("email", Email::new(&input.email));
        if input.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.finish()?;

        let Some(email) = email else {
            return Err(AuthError::Internal("validated login email missing".to_string()));
        };

        // A password outside the policy can never match a stored hash
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password.verify(&raw_password, self.config.pepper()) {
            tracing::warn!(user_id = %user.user_id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(LoginOutput { user, token })
    }
}
