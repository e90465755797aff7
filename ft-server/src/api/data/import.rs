//! Bulk import endpoint
//!
//! Rows land inside one database transaction; a failure anywhere means
//! nothing is imported.

use crate::{ApiError, ApiResult, UserId};
use crate::state::AppState;

use ft_core::{ErrorLocation, ImportRow};
use ft_db::TransactionRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub rows: Vec<ImportRow>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub count: u64,
}

/// POST /api/v1/data/import
///
/// Import structured rows, creating categories on first sight
pub async fn import(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<ImportRequest>,
) -> ApiResult<Json<ImportResponse>> {
    for (i, row) in request.rows.iter().enumerate() {
        if row.amount <= 0.0 {
            return Err(ApiError::Validation {
                message: format!("Row {}: amount must be positive", i + 1),
                field: Some("amount".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if row.category_name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: format!("Row {}: category name cannot be empty", i + 1),
                field: Some("category_name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    let count = TransactionRepository::new(state.pool.clone())
        .import_rows(user_id, &request.rows)
        .await?;

    log::info!("Imported {} row(s) for {}", count, user_id);

    Ok(Json(ImportResponse {
        success: true,
        count,
    }))
}
