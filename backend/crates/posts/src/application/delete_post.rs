//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &UserId, post_id: &PostId) -> PostResult<()> {
        let post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !post.is_owned_by(caller) {
            return Err(PostError::NotOwner);
        }

        // Lost a race with another delete
        if !self.repo.delete(post_id).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(post_id = %post_id, owner_id = %caller, "Post deleted");

        Ok(())
    }
}
