#![allow(dead_code)]

use chrono::NaiveDate;
use ft_core::{Budget, Category, Frequency, RecurringRule, Transaction, TransactionKind};
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a test Category
pub fn create_test_category(user_id: Uuid, name: &str, kind: TransactionKind) -> Category {
    Category::new(user_id, name.to_string(), kind)
}

/// Creates a test Transaction with sensible defaults
pub fn create_test_transaction(
    user_id: Uuid,
    kind: TransactionKind,
    category_id: Option<Uuid>,
    amount: f64,
    on: NaiveDate,
) -> Transaction {
    Transaction::new(
        user_id,
        amount,
        kind,
        on,
        Some("Test transaction".to_string()),
        category_id,
    )
}

/// Creates a test RecurringRule with sensible defaults
pub fn create_test_rule(user_id: Uuid, frequency: Frequency, start: NaiveDate) -> RecurringRule {
    RecurringRule::new(
        user_id,
        500_000.0,
        TransactionKind::Expense,
        frequency,
        start,
        Some("rent".to_string()),
        None,
    )
}

/// Creates a test Budget
pub fn create_test_budget(
    user_id: Uuid,
    category_id: Uuid,
    amount: f64,
    month: u32,
    year: i32,
) -> Budget {
    Budget::new(user_id, category_id, amount, month, year)
}
