//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::{PostContent, PostTitle};

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub title: PostTitle,
    pub content: Option<PostContent>,
    /// Owning user; only the owner may update or delete
    pub owner_id: UserId,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `owner_id`
    pub fn new(
        owner_id: UserId,
        title: PostTitle,
        content: Option<PostContent>,
        is_published: bool,
    ) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            title,
            content,
            owner_id,
            is_published,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Apply a partial update and bump `updated_at`
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(is_published) = changes.is_published {
            self.is_published = is_published;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of a post
///
/// `content: Some(None)` clears the content.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<PostTitle>,
    pub content: Option<Option<PostContent>>,
    pub is_published: Option<bool>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.is_published.is_none()
    }
}

/// Public summary of a post's owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAuthor {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// Read model: a post joined with its author
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub author: Option<PostAuthor>,
}
