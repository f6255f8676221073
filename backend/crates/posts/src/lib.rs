//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, value objects, repository trait
//! - `application/` - Create, read, list, update and delete use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Anyone may read posts. Creating requires a bearer token, and only the
//! owner of a post may update or delete it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::{PostFilter, PostRepository};
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{posts_router, posts_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
