//! API Server Library
//!
//! Configuration, router composition, and the ambient HTTP middleware.
//! The binary in `main.rs` wires these to PostgreSQL.

pub mod app;
pub mod config;
pub mod health;
pub mod security;

pub use app::build_app;
pub use config::{AppConfig, ConfigError, Environment};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
