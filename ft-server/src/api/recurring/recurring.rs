//! Recurring rule REST API handlers
//!
//! Category ownership is deliberately not checked when a rule is created;
//! the id is stored as-is and generated entries carry it verbatim.

use crate::{
    ApiError, ApiResult, CreateRuleRequest, DeleteResponse, RuleDto, RuleListResponse,
    RuleResponse, RunCheckResponse, UserId,
};
use crate::state::AppState;

use ft_core::{ErrorLocation, Frequency, RecurringRule, RuleWithCategory, TransactionKind};
use ft_db::RecurringRuleRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// GET /api/v1/recurring
///
/// The user's rules, soonest occurrence first
pub async fn list_rules(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<RuleListResponse>> {
    let repo = RecurringRuleRepository::new(state.pool.clone());
    let rules = repo.list_for_user(user_id).await?;

    Ok(Json(RuleListResponse {
        rules: rules.into_iter().map(RuleDto::from).collect(),
    }))
}

/// POST /api/v1/recurring
///
/// Create a rule; its cursor starts at the start date
pub async fn create_rule(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<CreateRuleRequest>,
) -> ApiResult<(StatusCode, Json<RuleResponse>)> {
    if request.amount <= 0.0 {
        return Err(ApiError::Validation {
            message: "Amount must be positive".to_string(),
            field: Some("amount".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let kind = TransactionKind::from_str(&request.kind)?;
    let frequency = Frequency::from_str(&request.frequency)?;

    let start_date =
        NaiveDate::from_str(&request.start_date).map_err(|_| ApiError::Validation {
            message: format!("Invalid start date: {}", request.start_date),
            field: Some("start_date".to_string()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let category_id = request
        .category_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let rule = RecurringRule::new(
        user_id,
        request.amount,
        kind,
        frequency,
        start_date,
        request.description,
        category_id,
    );

    RecurringRuleRepository::new(state.pool.clone())
        .create(&rule)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RuleResponse {
            rule: RuleWithCategory {
                rule,
                category_name: None,
            }
            .into(),
        }),
    ))
}

/// DELETE /api/v1/recurring/{id}
///
/// Delete a rule. Entries it already generated stay in the ledger.
pub async fn delete_rule(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let rule_id = Uuid::parse_str(&id)?;

    let affected = RecurringRuleRepository::new(state.pool.clone())
        .delete(user_id, rule_id)
        .await?;

    Ok(Json(DeleteResponse { affected }))
}

/// POST /api/v1/recurring/run-check
///
/// Materialize every due rule's oldest pending occurrence. A rule several
/// periods behind needs repeated calls to catch up fully.
pub async fn run_check(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<RunCheckResponse>> {
    let today = Utc::now().date_naive();

    let processed = RecurringRuleRepository::new(state.pool.clone())
        .process_due(user_id, today)
        .await?;

    if processed > 0 {
        log::info!("Materialized {} recurring occurrence(s) for {}", processed, user_id);
    }

    Ok(Json(RunCheckResponse { processed }))
}
