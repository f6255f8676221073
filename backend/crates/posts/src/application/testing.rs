//! In-memory fakes for use-case tests

use std::collections::HashMap;

use chrono::{Duration, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::Page;
use tokio::sync::RwLock;

use crate::domain::entity::{Post, PostAuthor, PostView};
use crate::domain::repository::{PostFilter, PostRepository};
use crate::domain::value_object::{PostContent, PostTitle};
use crate::error::PostResult;

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    authors: RwLock<HashMap<UserId, PostAuthor>>,
}

impl InMemoryPostRepository {
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn add_author(&self, user_id: UserId, first_name: &str, last_name: &str) {
        self.authors.write().await.insert(
            user_id,
            PostAuthor {
                user_id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
        );
    }

    async fn view(&self, post: Post) -> PostView {
        let author = self.authors.read().await.get(&post.owner_id).cloned();
        PostView { post, author }
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts.write().await.push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| &p.post_id == post_id).cloned())
    }

    async fn find_view_by_id(&self, post_id: &PostId) -> PostResult<Option<PostView>> {
        match self.find_by_id(post_id).await? {
            Some(post) => Ok(Some(self.view(post).await)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &PostFilter, page: &Page) -> PostResult<Vec<PostView>> {
        let mut matching: Vec<Post> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|p| filter.owner.is_none_or(|owner| p.owner_id == owner))
            .filter(|p| filter.published.is_none_or(|published| p.is_published == published))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            (b.created_at, b.post_id.as_uuid()).cmp(&(a.created_at, a.post_id.as_uuid()))
        });

        let mut views = Vec::new();
        for post in matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
        {
            views.push(self.view(post).await);
        }
        Ok(views)
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let mut posts = self.posts.write().await;
        if let Some(stored) = posts.iter_mut().find(|p| p.post_id == post.post_id) {
            *stored = post.clone();
        }
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| &p.post_id != post_id);
        Ok(posts.len() != before)
    }
}

/// Insert a post whose `created_at` is later than every post seeded before it
pub async fn seed_post(
    repo: &InMemoryPostRepository,
    owner_id: UserId,
    title: &str,
    is_published: bool,
) -> Post {
    let mut post = Post::new(owner_id, PostTitle::new(title).unwrap(), None, is_published);
    let offset = repo.len().await as i64;
    post.created_at = Utc::now() - Duration::hours(1) + Duration::seconds(offset);
    post.updated_at = post.created_at;
    post.content = PostContent::parse(format!("Content of {title}")).unwrap();
    repo.create(&post).await.unwrap();
    post
}
