//! Transaction ledger REST API handlers

use crate::{
    ApiError, ApiResult, CreateTransactionRequest, DeleteResponse, ListTransactionsQuery,
    TransactionListResponse, TransactionResponse, UserId,
};
use crate::state::AppState;

use ft_core::{ErrorLocation, LedgerEntry, Transaction, TransactionKind};
use ft_db::{CategoryRepository, TransactionRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// GET /api/v1/transactions?limit=
///
/// The user's ledger, most recent first
pub async fn list_transactions(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<ListTransactionsQuery>,
) -> ApiResult<Json<TransactionListResponse>> {
    let repo = TransactionRepository::new(state.pool.clone());
    let entries = repo.ledger(user_id, query.limit).await?;

    Ok(Json(TransactionListResponse {
        transactions: entries.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/v1/transactions
///
/// Record a ledger entry
pub async fn create_transaction(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    if request.amount <= 0.0 {
        return Err(ApiError::Validation {
            message: "Amount must be positive".to_string(),
            field: Some("amount".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let kind = TransactionKind::from_str(&request.kind)?;

    // An unparseable or missing date falls back to today
    let date = request
        .date
        .as_deref()
        .and_then(|d| NaiveDate::from_str(d).ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    let category_id = request
        .category_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let transaction = Transaction::new(
        user_id,
        request.amount,
        kind,
        date,
        request.description,
        category_id,
    );

    TransactionRepository::new(state.pool.clone())
        .create(&transaction)
        .await?;

    // Resolve the display name for the response body
    let category_name = match category_id {
        Some(id) => CategoryRepository::new(state.pool.clone())
            .find_by_id(user_id, id)
            .await?
            .map(|c| c.name),
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse {
            transaction: LedgerEntry {
                transaction,
                category_name,
            }
            .into(),
        }),
    ))
}

/// DELETE /api/v1/transactions/{id}
pub async fn delete_transaction(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let transaction_id = Uuid::parse_str(&id)?;

    let affected = TransactionRepository::new(state.pool.clone())
        .delete(user_id, transaction_id)
        .await?;

    Ok(Json(DeleteResponse { affected }))
}
