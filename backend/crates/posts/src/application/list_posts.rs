//! List Posts Use Case

use std::sync::Arc;

use kernel::pagination::{Page, PageMeta};

use crate::domain::entity::PostView;
use crate::domain::repository::{PostFilter, PostRepository};
use crate::error::PostResult;

#[derive(Debug)]
pub struct ListPostsOutput {
    pub posts: Vec<PostView>,
    pub pagination: PageMeta,
}

pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: PostFilter, page: Page) -> PostResult<ListPostsOutput> {
        let posts = self.repo.list(&filter, &page).await?;
        let pagination = page.meta(posts.len());

        Ok(ListPostsOutput { posts, pagination })
    }
}
