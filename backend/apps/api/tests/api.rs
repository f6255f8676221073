mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{JWT_SECRET, TestApp};
use platform::{DEFAULT_TOKEN_TTL, TokenKeys};
use serde_json::json;

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn duplicate_email_is_rejected_without_new_row() {
    let app = TestApp::new();
    app.register("ada@example.com", "secret1").await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "email": "ADA@example.com",
                "password": "another1",
                "firstName": "Ada",
                "lastName": "Again"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User with this email already exists");
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn login_token_decodes_to_the_user() {
    let app = TestApp::new();
    let (user_id, _) = app.register("ada@example.com", "secret1").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "secret1" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["user"].get("password").is_none());

    let keys = TokenKeys::new(JWT_SECRET.as_bytes(), DEFAULT_TOKEN_TTL);
    let claims = keys.verify(body["data"]["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.user_id().to_string(), user_id);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new();
    app.register("ada@example.com", "secret1").await;

    let (wrong_status, wrong) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "not-it-1" }),
        )
        .await;
    let (unknown_status, unknown) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ghost@example.com", "password": "secret1" }),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn disabled_account_is_403_after_correct_password() {
    let app = TestApp::new();
    let (user_id, _) = app.register("ada@example.com", "secret1").await;
    app.store.deactivate(&user_id.parse().unwrap()).await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "secret1" }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Account is disabled");
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = TestApp::new();
    let (user_id, token) = app.register("ada@example.com", "secret1").await;

    let (status, body) = app.get("/api/auth/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["id"], user_id);
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn me_for_vanished_user_is_404() {
    let app = TestApp::new();
    let keys = TokenKeys::new(JWT_SECRET.as_bytes(), DEFAULT_TOKEN_TTL);
    let ghost = keys.issue(&kernel::id::UserId::new()).unwrap();

    let (status, _) = app.get("/api/auth/me", Some(&ghost.token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Bearer token gate
// ============================================================================

#[tokio::test]
async fn missing_or_invalid_token_is_rejected_before_the_handler() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/posts", None, json!({ "title": "Hello" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Access token required");

    let (status, body) = app
        .post("/api/posts", Some("garbage"), json!({ "title": "Hello" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");

    let other_keys = TokenKeys::new(b"some-other-secret", DEFAULT_TOKEN_TTL);
    let forged = other_keys.issue(&kernel::id::UserId::new()).unwrap();
    let (status, _) = app
        .post("/api/posts", Some(&forged.token), json!({ "title": "Hello" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    assert_eq!(app.store.post_count().await, 0);
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn only_the_owner_may_modify_but_anyone_may_read() {
    let app = TestApp::new();
    let (_, alice) = app.register("alice@example.com", "secret1").await;
    let (_, bob) = app.register("bob@example.com", "secret1").await;
    let post_id = app.create_post(&alice, "Alice's post", true).await;
    let uri = format!("/api/posts/{post_id}");

    let (status, _) = app.put(&uri, Some(&bob), json!({ "title": "Mine now" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&uri, Some(&bob)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["post"]["title"], "Alice's post");
    assert_eq!(body["data"]["post"]["author"]["firstName"], "Test");

    let (status, body) = app
        .put(&uri, Some(&alice), json!({ "title": "Edited", "content": "" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["post"]["title"], "Edited");
    assert!(body["data"]["post"]["content"].is_null());

    let (status, body) = app.delete(&uri, Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post deleted successfully");

    let (status, _) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pagination_reports_has_more_on_full_pages() {
    let app = TestApp::new();
    let (_, token) = app.register("ada@example.com", "secret1").await;
    for i in 0..15 {
        app.create_post(&token, &format!("Post {i}"), true).await;
    }

    let (status, body) = app.get("/api/posts?page=1&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 1, "limit": 10, "hasMore": true })
    );

    let (_, body) = app.get("/api/posts?page=2&limit=10", None).await;
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn user_listing_and_published_filter() {
    let app = TestApp::new();
    let (alice_id, alice) = app.register("alice@example.com", "secret1").await;
    let (_, bob) = app.register("bob@example.com", "secret1").await;
    app.create_post(&alice, "draft", false).await;
    app.create_post(&alice, "live", true).await;
    app.create_post(&bob, "bob's", true).await;

    let (status, body) = app.get(&format!("/api/posts/user/{alice_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["userId"] == alice_id));

    let (_, body) = app.get("/api/posts?published=true", None).await;
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 2);

    let (_, body) = app
        .get(&format!("/api/posts/user/{alice_id}?published=false"), None)
        .await;
    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "draft");
}

#[tokio::test]
async fn bad_query_and_path_are_400() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/posts?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/posts?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/posts/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_update_is_400() {
    let app = TestApp::new();
    let (_, token) = app.register("ada@example.com", "secret1").await;
    let post_id = app.create_post(&token, "Hello", false).await;

    let (status, body) = app
        .put(&format!("/api/posts/{post_id}"), Some(&token), json!({}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn null_content_clears_the_post_body() {
    let app = TestApp::new();
    let (_, token) = app.register("ada@example.com", "secret1").await;
    let post_id = app.create_post(&token, "Hello", false).await;

    let (status, body) = app
        .put(
            &format!("/api/posts/{post_id}"),
            Some(&token),
            json!({ "content": null }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["post"]["content"], serde_json::Value::Null);
    assert_eq!(body["data"]["post"]["title"], "Hello");
}

// ============================================================================
// Ambient
// ============================================================================

#[tokio::test]
async fn health_is_always_ok() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["environment"], "test");
    let timestamp = body["data"]["timestamp"].as_str().unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
    let age = chrono::Utc::now().signed_duration_since(parsed);
    assert!(age.num_seconds().abs() < 60);
}

#[tokio::test]
async fn unknown_route_is_404_envelope() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Route not found" }));
}

#[tokio::test]
async fn unsupported_method_is_405_envelope() {
    let app = TestApp::new();
    let (_, token) = app.register("ada@example.com", "secret1").await;
    let post_id = app.create_post(&token, "Hello", true).await;

    let (status, body) = app
        .send(common::request("PATCH", "/api/posts", None, None))
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "success": false, "message": "Method not allowed" }));

    let (status, body) = app
        .send(common::request(
            "PATCH",
            &format!("/api/posts/{post_id}"),
            Some(&token),
            Some(json!({ "title": "Renamed" })),
        ))
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);

    let (status, body) = app.delete("/api/health", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = TestApp::new();

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        Request::get("/api/health").body(Body::empty()).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "SAMEORIGIN");
}

#[tokio::test]
async fn malformed_json_is_400_envelope() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Request::post("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn oversized_body_is_413_envelope() {
    let app = TestApp::new();
    let huge = "x".repeat(api::app::BODY_LIMIT_BYTES + 1);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": huge }),
        )
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
}
