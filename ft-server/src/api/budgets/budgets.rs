//! Budget REST API handlers

use crate::{
    ApiError, ApiResult, BudgetDto, BudgetListResponse, BudgetResponse, DeleteResponse,
    ListBudgetsQuery, UpsertBudgetRequest, UserId,
};
use crate::state::AppState;

use ft_core::{Budget, ErrorLocation};
use ft_db::BudgetRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

/// GET /api/v1/budgets?month=&year=
///
/// The month's budgets with usage recomputed from raw transactions
pub async fn list_budgets(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<ListBudgetsQuery>,
) -> ApiResult<Json<BudgetListResponse>> {
    if !(1..=12).contains(&query.month) {
        return Err(ApiError::Validation {
            message: "Month must be between 1 and 12".to_string(),
            field: Some("month".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = BudgetRepository::new(state.pool.clone());
    let budgets = repo.list_with_usage(user_id, query.month, query.year).await?;

    Ok(Json(BudgetListResponse {
        budgets: budgets.into_iter().map(BudgetDto::from).collect(),
    }))
}

/// PUT /api/v1/budgets
///
/// Set or overwrite the cap for (category, month, year)
pub async fn upsert_budget(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<UpsertBudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    if request.amount <= 0.0 {
        return Err(ApiError::Validation {
            message: "Amount must be positive".to_string(),
            field: Some("amount".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if !(1..=12).contains(&request.month) {
        return Err(ApiError::Validation {
            message: "Month must be between 1 and 12".to_string(),
            field: Some("month".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let category_id = Uuid::parse_str(&request.category_id)?;

    let budget = BudgetRepository::new(state.pool.clone())
        .upsert(&Budget::new(
            user_id,
            category_id,
            request.amount,
            request.month,
            request.year,
        ))
        .await?;

    Ok(Json(budget.into()))
}

/// DELETE /api/v1/budgets/{id}
pub async fn delete_budget(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let budget_id = Uuid::parse_str(&id)?;

    let affected = BudgetRepository::new(state.pool.clone())
        .delete(user_id, budget_id)
        .await?;

    Ok(Json(DeleteResponse { affected }))
}
