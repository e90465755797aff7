use crate::health;
use crate::state::AppState;

use crate::api::{
    auth::auth::{login, register},
    budgets::budgets::{delete_budget, list_budgets, upsert_budget},
    categories::categories::{create_category, delete_category, list_categories},
    data::{export::export, import::import},
    recurring::recurring::{create_rule, delete_rule, list_rules, run_check},
    transactions::transactions::{create_transaction, delete_transaction, list_transactions},
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth endpoints (no token required)
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        // Categories
        .route("/api/v1/categories", get(list_categories).post(create_category))
        .route("/api/v1/categories/{id}", delete(delete_category))
        // Transactions
        .route(
            "/api/v1/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/api/v1/transactions/{id}", delete(delete_transaction))
        // Budgets
        .route("/api/v1/budgets", get(list_budgets).put(upsert_budget))
        .route("/api/v1/budgets/{id}", delete(delete_budget))
        // Recurring rules
        .route("/api/v1/recurring", get(list_rules).post(create_rule))
        .route("/api/v1/recurring/{id}", delete(delete_rule))
        .route("/api/v1/recurring/run-check", post(run_check))
        // Data bridge
        .route("/api/v1/data/export", get(export))
        .route("/api/v1/data/import", post(import))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for the web client)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
