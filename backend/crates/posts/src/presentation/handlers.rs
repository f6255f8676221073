//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::{ApiJson, ApiPath, ApiQuery};
use kernel::id::{PostId, UserId};
use kernel::pagination::Page;
use kernel::response::ApiResponse;
use platform::AuthenticatedUser;
use std::sync::Arc;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::{PostFilter, PostRepository};
use crate::error::PostResult;
use crate::presentation::dto::{
    CreatePostRequest, ListPostsQuery, PostListPayload, PostPayload, UpdatePostRequest,
};

/// Shared state for post handlers
pub struct PostsAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for PostsAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

async fn list_with<R>(
    state: &PostsAppState<R>,
    owner: Option<UserId>,
    query: ListPostsQuery,
) -> PostResult<Json<ApiResponse<PostListPayload>>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let page = Page::new(query.page, query.limit)?;
    let filter = PostFilter {
        owner,
        published: query.published,
    };

    let output = ListPostsUseCase::new(state.repo.clone())
        .execute(filter, page)
        .await?;

    Ok(Json(ApiResponse::success(PostListPayload {
        posts: output.posts.into_iter().map(Into::into).collect(),
        pagination: output.pagination,
    })))
}

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
    ApiQuery(query): ApiQuery<ListPostsQuery>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    list_with(&state, None, query).await
}

/// GET /api/posts/user/{user_id}
pub async fn list_user_posts<R>(
    State(state): State<PostsAppState<R>>,
    ApiPath(user_id): ApiPath<UserId>,
    ApiQuery(query): ApiQuery<ListPostsQuery>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    list_with(&state, Some(user_id), query).await
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    ApiPath(post_id): ApiPath<PostId>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let view = GetPostUseCase::new(state.repo.clone())
        .execute(&post_id)
        .await?;

    Ok(Json(ApiResponse::success(PostPayload { post: view.into() })))
}

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    caller: AuthenticatedUser,
    ApiJson(req): ApiJson<CreatePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let input = CreatePostInput {
        title: req.title,
        content: req.content,
        is_published: req.is_published,
    };

    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(caller.user_id, input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::success(PostPayload { post: post.into() })
                .with_message("Post created successfully"),
        ),
    ))
}

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    caller: AuthenticatedUser,
    ApiPath(post_id): ApiPath<PostId>,
    ApiJson(req): ApiJson<UpdatePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    let input = UpdatePostInput {
        title: req.title,
        content: req.content,
        is_published: req.is_published,
    };

    let post = UpdatePostUseCase::new(state.repo.clone())
        .execute(&caller.user_id, &post_id, input)
        .await?;

    Ok(Json(
        ApiResponse::success(PostPayload { post: post.into() })
            .with_message("Post updated successfully"),
    ))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    caller: AuthenticatedUser,
    ApiPath(post_id): ApiPath<PostId>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Send + Sync + 'static,
{
    DeletePostUseCase::new(state.repo.clone())
        .execute(&caller.user_id, &post_id)
        .await?;

    Ok(Json(ApiResponse::message("Post deleted successfully")))
}
