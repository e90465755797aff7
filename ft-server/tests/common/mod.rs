#![allow(dead_code)]

//! Test infrastructure for ft-server API tests

use ft_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret";

/// Create AppState backed by an in-memory database
pub async fn create_test_state() -> AppState {
    let pool = ft_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, TEST_JWT_SECRET)
}

/// Register a user through the API and return their bearer token
pub async fn register_test_user(app: &Router, email: &str) -> String {
    let body = serde_json::json!({
        "email": email,
        "password": "hunter22",
        "name": "Test User",
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

/// Build an authenticated request with a JSON body
pub fn authed_request(method: &str, uri: &str, token: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token));

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Collect a response body into JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
