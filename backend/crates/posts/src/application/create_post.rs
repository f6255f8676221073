//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::validation::FieldErrors;

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostContent, PostTitle};
use crate::error::{PostError, PostResult};

/// Create post input (unvalidated)
#[derive(Debug, Default)]
pub struct CreatePostInput {
    pub title: String,
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller becomes the owner
    pub async fn execute(&self, owner_id: UserId, input: CreatePostInput) -> PostResult<Post> {
        let mut errors = FieldErrors::new();
        let title = errors.capture("title", PostTitle::new(&input.title));
        let content = match input.content {
            Some(content) => errors.capture("content", PostContent::parse(content)).flatten(),
            None => None,
        };
        errors.finish()?;

        let title =
            title.ok_or_else(|| PostError::Internal("validated title missing".to_string()))?;

        let post = Post::new(owner_id, title, content, input.is_published.unwrap_or(false));
        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            owner_id = %post.owner_id,
            "Post created"
        );

        Ok(post)
    }
}
