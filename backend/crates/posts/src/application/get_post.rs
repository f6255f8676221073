//! Get Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::PostView;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &PostId) -> PostResult<PostView> {
        self.repo
            .find_view_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
