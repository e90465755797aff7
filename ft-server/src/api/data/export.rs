//! Full-ledger export endpoint
//!
//! CSV rendering stays client-side; the API hands out structured rows.

use crate::{ApiResult, TransactionDto, UserId};
use crate::state::AppState;

use ft_db::TransactionRepository;

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub transactions: Vec<TransactionDto>,
}

/// GET /api/v1/data/export
///
/// Every ledger entry the user owns, date descending, with category names
pub async fn export(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<ExportResponse>> {
    let entries = TransactionRepository::new(state.pool.clone())
        .export_all(user_id)
        .await?;

    Ok(Json(ExportResponse {
        transactions: entries.into_iter().map(Into::into).collect(),
    }))
}
