//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Post, PostAuthor, PostChanges, PostView};
pub use repository::{PostFilter, PostRepository};
