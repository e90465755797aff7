//! Integration tests for the auth API handlers
mod common;

use crate::common::{body_json, create_test_state, register_test_user};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use ft_server::build_router;

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let state = create_test_state().await;
    let app = build_router(state);

    let body = serde_json::json!({
        "email": "alice@example.com",
        "password": "hunter22",
        "name": "Alice",
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert_eq!(json["user"]["name"], "Alice");
    assert!(json["user"].get("password_hash").is_none());
    assert!(!json["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let state = create_test_state().await;
    let app = build_router(state);

    for (body, field) in [
        (
            serde_json::json!({"email": "no-at-sign", "password": "hunter22", "name": "Bob"}),
            "email",
        ),
        (
            serde_json::json!({"email": "bob@example.com", "password": "short", "name": "Bob"}),
            "password",
        ),
        (
            serde_json::json!({"email": "bob@example.com", "password": "hunter22", "name": "B"}),
            "name",
        ),
    ] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], field);
    }
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let state = create_test_state().await;
    let app = build_router(state);

    register_test_user(&app, "carol@example.com").await;

    let body = serde_json::json!({
        "email": "carol@example.com",
        "password": "different-pass",
        "name": "Other Carol",
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_login_round_trip() {
    let state = create_test_state().await;
    let app = build_router(state);

    register_test_user(&app, "dave@example.com").await;

    let body = serde_json::json!({
        "email": "dave@example.com",
        "password": "hunter22",
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "dave@example.com");
    assert!(!json["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let state = create_test_state().await;
    let app = build_router(state);

    register_test_user(&app, "erin@example.com").await;

    let wrong_password = serde_json::json!({
        "email": "erin@example.com",
        "password": "not-the-password",
    });
    let unknown_email = serde_json::json!({
        "email": "nobody@example.com",
        "password": "hunter22",
    });

    let mut bodies = Vec::new();
    for payload in [wrong_password, unknown_email] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(body_json(response).await);
    }

    // Same code and message either way: no account probing
    assert_eq!(bodies[0], bodies[1]);
}
