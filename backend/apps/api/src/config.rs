//! Application Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded) and
//! shared read-only afterwards.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use platform::DEFAULT_TOKEN_TTL;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "api=info,auth=info,posts=info,tower_http=info";

/// Used when `JWT_SECRET` is unset outside production
const DEVELOPMENT_JWT_SECRET: &str = "development-only-jwt-secret-do-not-deploy";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment `{other}`")),
        }
    }
}

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub cors_origins: CorsOrigins,
    pub password_pepper: Option<String>,
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match get("APP_ENV") {
            Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                var: "APP_ENV",
                value,
                reason,
            })?,
            None => Environment::default(),
        };

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            None => DEVELOPMENT_JWT_SECRET.to_string(),
        };

        let jwt_ttl = match get("JWT_EXPIRES_IN") {
            Some(value) => parse_duration(&value).map_err(|reason| ConfigError::Invalid {
                var: "JWT_EXPIRES_IN",
                value,
                reason,
            })?,
            None => DEFAULT_TOKEN_TTL,
        };

        let cors_origins = match get("CORS_ORIGINS") {
            None => CorsOrigins::Any,
            Some(value) if value.trim() == "*" => CorsOrigins::Any,
            Some(value) => CorsOrigins::List(
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            ),
        };

        Ok(Self {
            environment,
            port,
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_ttl,
            cors_origins,
            password_pepper: get("PASSWORD_PEPPER"),
        })
    }

    /// Whether the built-in development JWT secret is in use
    pub fn uses_development_secret(&self) -> bool {
        self.jwt_secret == DEVELOPMENT_JWT_SECRET
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("environment", &self.environment)
            .field("port", &self.port)
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_ttl", &self.jwt_ttl)
            .field("cors_origins", &self.cors_origins)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

fn parse_or<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Parse `<n>[s|m|h|d]`; a bare number is seconds
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let (digits, unit_secs) = match value.char_indices().last() {
        Some((i, 's')) => (&value[..i], 1),
        Some((i, 'm')) => (&value[..i], 60),
        Some((i, 'h')) => (&value[..i], 3600),
        Some((i, 'd')) => (&value[..i], 86_400),
        Some(_) => (value, 1),
        None => return Err("empty duration".to_string()),
    };

    let amount: u64 = digits
        .trim()
        .parse()
        .map_err(|_| format!("expected <number>[s|m|h|d], got `{value}`"))?;

    if amount == 0 {
        return Err("duration must be positive".to_string());
    }

    amount
        .checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(|| "duration is too large".to_string())
}
