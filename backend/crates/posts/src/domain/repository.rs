//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};
use kernel::pagination::Page;

use crate::domain::entity::{Post, PostView};
use crate::error::PostResult;

/// Listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Only posts owned by this user
    pub owner: Option<UserId>,
    /// Only posts with this published flag
    pub published: Option<bool>,
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// Find post by ID together with its author
    async fn find_view_by_id(&self, post_id: &PostId) -> PostResult<Option<PostView>>;

    /// List posts newest first
    async fn list(&self, filter: &PostFilter, page: &Page) -> PostResult<Vec<PostView>>;

    /// Persist title, content, published flag and `updated_at`
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Delete a post; `false` if it did not exist
    async fn delete(&self, post_id: &PostId) -> PostResult<bool>;
}
