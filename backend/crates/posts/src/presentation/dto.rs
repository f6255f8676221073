//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::PageMeta;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::{Post, PostAuthor, PostView};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

/// Update post request; absent fields are left unchanged
///
/// `content` is `Some(None)` when the body carries an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
    pub is_published: Option<bool>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub published: Option<bool>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl From<PostAuthor> for AuthorResponse {
    fn from(author: PostAuthor) -> Self {
        Self {
            id: author.user_id,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: Option<String>,
    pub user_id: UserId,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id,
            title: post.title.as_str().to_owned(),
            content: post.content.map(|c| c.as_str().to_owned()),
            user_id: post.owner_id,
            is_published: post.is_published,
            created_at: post.created_at,
            updated_at: post.updated_at,
            author: None,
        }
    }
}

impl From<PostView> for PostResponse {
    fn from(view: PostView) -> Self {
        Self {
            author: view.author.map(AuthorResponse::from),
            ..Self::from(view.post)
        }
    }
}

/// Single post payload
#[derive(Debug, Clone, Serialize)]
pub struct PostPayload {
    pub post: PostResponse,
}

/// List payload
#[derive(Debug, Clone, Serialize)]
pub struct PostListPayload {
    pub posts: Vec<PostResponse>,
    pub pagination: PageMeta,
}
