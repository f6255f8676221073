//! Shared harness: an in-memory store behind the real router

#![allow(dead_code)]

use std::sync::Arc;

use api::{AppConfig, build_app};
use auth::models::{Email, User};
use auth::{AuthError, AuthResult, UserRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use kernel::id::{PostId, UserId};
use kernel::pagination::Page;
use posts::models::{Post, PostAuthor, PostView};
use posts::{PostFilter, PostRepository, PostResult};
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
}

/// Users and posts in one place so post reads can join the author
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }

    pub async fn deactivate(&self, user_id: &UserId) {
        let mut tables = self.tables.write().await;
        if let Some(user) = tables.users.iter_mut().find(|u| &u.user_id == user_id) {
            user.is_active = false;
        }
    }

    fn view(tables: &Tables, post: &Post) -> PostView {
        let author = tables
            .users
            .iter()
            .find(|u| u.user_id == post.owner_id)
            .map(|u| PostAuthor {
                user_id: u.user_id,
                first_name: u.first_name.as_str().to_owned(),
                last_name: u.last_name.as_str().to_owned(),
            });
        PostView {
            post: post.clone(),
            author,
        }
    }
}

impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|u| &u.email == email))
    }
}

impl PostRepository for InMemoryStore {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.tables.write().await.posts.push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| &p.post_id == post_id).cloned())
    }

    async fn find_view_by_id(&self, post_id: &PostId) -> PostResult<Option<PostView>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .find(|p| &p.post_id == post_id)
            .map(|p| Self::view(&tables, p)))
    }

    async fn list(&self, filter: &PostFilter, page: &Page) -> PostResult<Vec<PostView>> {
        let tables = self.tables.read().await;
        let mut matching: Vec<&Post> = tables
            .posts
            .iter()
            .filter(|p| filter.owner.is_none_or(|owner| p.owner_id == owner))
            .filter(|p| filter.published.is_none_or(|published| p.is_published == published))
            .collect();
        matching.sort_by(|a, b| {
            (b.created_at, b.post_id.as_uuid()).cmp(&(a.created_at, a.post_id.as_uuid()))
        });

        Ok(matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|p| Self::view(&tables, p))
            .collect())
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(stored) = tables.posts.iter_mut().find(|p| p.post_id == post.post_id) {
            *stored = post.clone();
        }
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|p| &p.post_id != post_id);
        Ok(tables.posts.len() != before)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "APP_ENV" => Some("test".to_string()),
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        "JWT_SECRET" => Some(JWT_SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = InMemoryStore::default();
        let router = build_app(store.clone(), store.clone(), &test_config());
        Self { router, store }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request("PUT", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request("DELETE", uri, token, None)).await
    }

    /// Register a user and return `(user_id, token)`
    pub async fn register(&self, email: &str, password: &str) -> (String, String) {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                json!({
                    "email": email,
                    "password": password,
                    "firstName": "Test",
                    "lastName": "User"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        (
            body["data"]["user"]["id"].as_str().unwrap().to_string(),
            body["data"]["token"].as_str().unwrap().to_string(),
        )
    }

    /// Create a post and return its id
    pub async fn create_post(&self, token: &str, title: &str, published: bool) -> String {
        let (status, body) = self
            .post(
                "/api/posts",
                Some(token),
                json!({ "title": title, "content": "Body", "isPublished": published }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["data"]["post"]["id"].as_str().unwrap().to_string()
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
