//! Update Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use kernel::validation::FieldErrors;

use crate::domain::entity::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostContent, PostTitle};
use crate::error::{PostError, PostResult};

/// Update post input; `None` leaves a field unchanged
///
/// `content: Some(None)` and `content: Some(Some(""))` both clear the content.
#[derive(Debug, Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub is_published: Option<bool>,
}

impl UpdatePostInput {
    fn into_changes(self) -> PostResult<PostChanges> {
        let mut errors = FieldErrors::new();
        let title = self
            .title
            .and_then(|title| errors.capture("title", PostTitle::new(title)));
        let content = self.content.and_then(|content| match content {
            Some(content) => errors.capture("content", PostContent::parse(content)),
            None => Some(None),
        });
        errors.finish()?;

        let changes = PostChanges {
            title,
            content,
            is_published: self.is_published,
        };

        if changes.is_empty() {
            return Err(PostError::NoChanges);
        }

        Ok(changes)
    }
}

pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        caller: &UserId,
        post_id: &PostId,
        input: UpdatePostInput,
    ) -> PostResult<Post> {
        let changes = input.into_changes()?;

        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !post.is_owned_by(caller) {
            return Err(PostError::NotOwner);
        }

        post.apply(changes);
        self.repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, owner_id = %post.owner_id, "Post updated");

        Ok(post)
    }
}
