//! Category REST API handlers

use crate::{
    ApiError, ApiResult, CategoryDto, CategoryListResponse, CategoryResponse,
    CreateCategoryRequest, DeleteResponse, UserId,
};
use crate::state::AppState;

use ft_core::{Category, ErrorLocation, TransactionKind};
use ft_db::CategoryRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/categories
///
/// List the user's categories, sorted by name
pub async fn list_categories(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<CategoryListResponse>> {
    let repo = CategoryRepository::new(state.pool.clone());
    let categories = repo.list_for_user(user_id).await?;

    Ok(Json(CategoryListResponse {
        categories: categories.into_iter().map(CategoryDto::from).collect(),
    }))
}

/// POST /api/v1/categories
///
/// Create a category
pub async fn create_category(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "Category name cannot be empty".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let kind = TransactionKind::from_str(&request.kind)?;

    let category = Category::new(user_id, name.to_string(), kind);
    CategoryRepository::new(state.pool.clone())
        .create(&category)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse {
            category: category.into(),
        }),
    ))
}

/// DELETE /api/v1/categories/{id}
///
/// Delete a category. Transactions referencing it are left in place and
/// render as uncategorized from then on.
pub async fn delete_category(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let category_id = Uuid::parse_str(&id)?;

    let affected = CategoryRepository::new(state.pool.clone())
        .delete(user_id, category_id)
        .await?;

    Ok(Json(DeleteResponse { affected }))
}
