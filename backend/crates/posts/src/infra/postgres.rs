//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::pagination::Page;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Post, PostAuthor, PostView};
use crate::domain::repository::{PostFilter, PostRepository};
use crate::domain::value_object::{PostContent, PostTitle};
use crate::error::PostResult;

/// Post columns joined with the author's name
const POST_VIEW_SELECT: &str = r#"
    SELECT
        p.post_id,
        p.title,
        p.content,
        p.user_id,
        p.is_published,
        p.created_at,
        p.updated_at,
        u.first_name AS author_first_name,
        u.last_name AS author_last_name
    FROM posts p
    LEFT JOIN users u ON u.user_id = p.user_id
"#;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                content,
                user_id,
                is_published,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.content.as_ref().map(PostContent::as_str))
        .bind(post.owner_id.as_uuid())
        .bind(post.is_published)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                user_id,
                is_published,
                created_at,
                updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_view_by_id(&self, post_id: &PostId) -> PostResult<Option<PostView>> {
        let row = sqlx::query_as::<_, PostViewRow>(&format!(
            "{POST_VIEW_SELECT} WHERE p.post_id = $1"
        ))
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostViewRow::into_view))
    }

    async fn list(&self, filter: &PostFilter, page: &Page) -> PostResult<Vec<PostView>> {
        let rows = sqlx::query_as::<_, PostViewRow>(&format!(
            r#"{POST_VIEW_SELECT}
            WHERE ($1::uuid IS NULL OR p.user_id = $1)
              AND ($2::boolean IS NULL OR p.is_published = $2)
            ORDER BY p.created_at DESC, p.post_id DESC
            LIMIT $3 OFFSET $4"#
        ))
        .bind(filter.owner.map(UserId::into_uuid))
        .bind(filter.published)
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostViewRow::into_view).collect())
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2,
                content = $3,
                is_published = $4,
                updated_at = $5
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.content.as_ref().map(PostContent::as_str))
        .bind(post.is_published)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    content: Option<String>,
    user_id: Uuid,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: PostTitle::from_db(self.title),
            content: self.content.map(PostContent::from_db),
            owner_id: UserId::from_uuid(self.user_id),
            is_published: self.is_published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostViewRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
}

impl PostViewRow {
    fn into_view(self) -> PostView {
        let post = self.post.into_post();
        let author = match (self.author_first_name, self.author_last_name) {
            (Some(first_name), Some(last_name)) => Some(PostAuthor {
                user_id: post.owner_id,
                first_name,
                last_name,
            }),
            _ => None,
        };

        PostView { post, author }
    }
}
