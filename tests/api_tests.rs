use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use user_registration::api::{create_router, AppState};
use user_registration::infrastructure::user::{InMemoryUserStore, Sha256Hasher};

fn make_router() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(Sha256Hasher::with_pepper("test-pepper")),
    );
    create_router(state)
}

async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register_alice(app: &Router) -> Response<Body> {
    let body = json!({"name": " Alice ", "email": "Alice@Example.com", "password": "Abcdef12"});
    post_json(app, "/auth/register", &body.to_string()).await
}

#[tokio::test]
async fn health_endpoint_works() {
    let app = make_router();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");

    let live = app
        .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(live.status(), StatusCode::OK);
}

#[tokio::test]
async fn register_returns_normalized_user() {
    let app = make_router();

    let response = register_alice(&app).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let app = make_router();
    register_alice(&app).await;

    let body = json!({"name": "Other", "email": "alice@EXAMPLE.com", "password": "Zyxwvu98"});
    let response = post_json(&app, "/auth/register", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Email already registered");
    assert_eq!(body["error"]["type"], "conflict_error");
}

#[tokio::test]
async fn register_validation_messages() {
    let app = make_router();

    let cases = [
        ("null", "Request is required"),
        (r#"{"email": "a@example.com", "password": "Abcdef12"}"#, "Name is required"),
        (r#"{"name": "A", "email": "a@b", "password": "Abcdef12"}"#, "Invalid email"),
        (r#"{"name": "A", "email": "a@example.com", "password": "short7"}"#, "Weak password"),
    ];

    for (body, message) in cases {
        let response = post_json(&app, "/auth/register", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], message);
        assert_eq!(body["error"]["type"], "invalid_request_error");
    }
}

#[tokio::test]
async fn register_malformed_json() {
    let app = make_router();

    let response = post_json(&app, "/auth/register", "{oops").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "json_parse_error");
}

#[tokio::test]
async fn login_after_register() {
    let app = make_router();
    register_alice(&app).await;

    let body = json!({"email": "ALICE@example.com", "password": "Abcdef12"});
    let response = post_json(&app, "/auth/login", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = make_router();
    register_alice(&app).await;

    let wrong_password = json!({"email": "alice@example.com", "password": "wrongpass"});
    let unknown_user = json!({"email": "notfound@example.com", "password": "Abcdef12"});

    let first = post_json(&app, "/auth/login", &wrong_password.to_string()).await;
    let second = post_json(&app, "/auth/login", &unknown_user.to_string()).await;

    assert_eq!(first.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn login_requires_fields() {
    let app = make_router();

    let response = post_json(&app, "/auth/login", r#"{"password": "Abcdef12"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["message"], "Email is required");

    let response = post_json(&app, "/auth/login", r#"{"email": "a@example.com", "password": " "}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["message"], "Password is required");
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let app = make_router();

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["type"], "not_found_error");
}
