//! Integration tests for the budget API handlers
mod common;

use crate::common::{authed_request, body_json, create_test_state, register_test_user};

use axum::http::StatusCode;
use tower::ServiceExt;
use uuid::Uuid;

use ft_server::build_router;

async fn create_category(app: &axum::Router, token: &str, name: &str) -> String {
    let request = authed_request(
        "POST",
        "/api/v1/categories",
        token,
        Some(serde_json::json!({"name": name, "kind": "EXPENSE"})),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    body_json(response).await["category"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_upsert_budget_validates_before_storage() {
    let state = create_test_state().await;
    let app = build_router(state);
    let token = register_test_user(&app, "alice@example.com").await;

    for (body, field) in [
        (
            serde_json::json!({"category_id": Uuid::new_v4(), "amount": 0.0, "month": 6, "year": 2024}),
            "amount",
        ),
        (
            serde_json::json!({"category_id": Uuid::new_v4(), "amount": 100.0, "month": 13, "year": 2024}),
            "month",
        ),
    ] {
        let request = authed_request("PUT", "/api/v1/budgets", &token, Some(body));
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], field);
    }
}

#[tokio::test]
async fn test_upsert_overwrites_existing_cap() {
    let state = create_test_state().await;
    let app = build_router(state);
    let token = register_test_user(&app, "bob@example.com").await;
    let category_id = create_category(&app, &token, "Groceries").await;

    for amount in [300.0, 450.0] {
        let request = authed_request(
            "PUT",
            "/api/v1/budgets",
            &token,
            Some(serde_json::json!({
                "category_id": category_id,
                "amount": amount,
                "month": 6,
                "year": 2024,
            })),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let request = authed_request("GET", "/api/v1/budgets?month=6&year=2024", &token, None);
    let response = app.oneshot(request).await.unwrap();

    let json = body_json(response).await;
    let budgets = json["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["amount"], 450.0);
}

#[tokio::test]
async fn test_budget_usage_reflects_month_spending() {
    let state = create_test_state().await;
    let app = build_router(state);
    let token = register_test_user(&app, "carol@example.com").await;
    let category_id = create_category(&app, &token, "Dining").await;

    // Two in June, one outside the window
    for (amount, date) in [(100.0, "2024-06-01"), (50.0, "2024-06-30"), (70.0, "2024-07-01")] {
        let request = authed_request(
            "POST",
            "/api/v1/transactions",
            &token,
            Some(serde_json::json!({
                "amount": amount,
                "kind": "EXPENSE",
                "date": date,
                "category_id": category_id,
            })),
        );
        app.clone().oneshot(request).await.unwrap();
    }

    let request = authed_request(
        "PUT",
        "/api/v1/budgets",
        &token,
        Some(serde_json::json!({
            "category_id": category_id,
            "amount": 400.0,
            "month": 6,
            "year": 2024,
        })),
    );
    app.clone().oneshot(request).await.unwrap();

    let request = authed_request("GET", "/api/v1/budgets?month=6&year=2024", &token, None);
    let response = app.oneshot(request).await.unwrap();

    let json = body_json(response).await;
    let budgets = json["budgets"].as_array().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["spent"], 150.0);
    assert_eq!(budgets[0]["remaining"], 250.0);
    assert_eq!(budgets[0]["percentage"], 37.5);
    assert_eq!(budgets[0]["category_name"], "Dining");
}

#[tokio::test]
async fn test_list_budgets_rejects_invalid_month() {
    let state = create_test_state().await;
    let app = build_router(state);
    let token = register_test_user(&app, "dave@example.com").await;

    let request = authed_request("GET", "/api/v1/budgets?month=0&year=2024", &token, None);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_budget_is_silent_noop_for_unknown_id() {
    let state = create_test_state().await;
    let app = build_router(state);
    let token = register_test_user(&app, "erin@example.com").await;

    let request = authed_request(
        "DELETE",
        &format!("/api/v1/budgets/{}", Uuid::new_v4()),
        &token,
        None,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["affected"], 0);
}
