pub mod budget_repository;
pub mod category_repository;
pub mod recurring_rule_repository;
pub mod transaction_repository;
pub mod user_repository;

use crate::{DbError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use ft_core::{ErrorLocation, Frequency, TransactionKind};
use uuid::Uuid;

#[track_caller]
pub(crate) fn decode_error(message: impl Into<String>) -> DbError {
    DbError::Decode {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub(crate) fn parse_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| decode_error(format!("invalid uuid '{}': {}", value, e)))
}

pub(crate) fn parse_timestamp(ts: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| decode_error(format!("invalid timestamp {}", ts)))
}

pub(crate) fn parse_kind(value: &str) -> Result<TransactionKind> {
    value
        .parse()
        .map_err(|_| decode_error(format!("invalid transaction kind '{}'", value)))
}

pub(crate) fn parse_frequency(value: &str) -> Result<Frequency> {
    value
        .parse()
        .map_err(|_| decode_error(format!("invalid frequency '{}'", value)))
}
