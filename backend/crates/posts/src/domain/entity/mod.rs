//! Entity Module

pub mod post;

pub use post::{Post, PostAuthor, PostChanges, PostView};
