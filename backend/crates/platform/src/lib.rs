//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Access token signing and verification (JWT, HS256)
//! - Bearer token middleware for protected routes

pub mod bearer;
pub mod password;
pub mod token;

pub use bearer::{AuthenticatedUser, require_bearer};
pub use token::{DEFAULT_TOKEN_TTL, IssuedToken, TokenClaims, TokenError, TokenKeys};
