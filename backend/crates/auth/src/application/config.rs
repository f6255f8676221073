//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn with_pepper(pepper: impl Into<Vec<u8>>) -> Self {
        Self {
            password_pepper: Some(pepper.into()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
