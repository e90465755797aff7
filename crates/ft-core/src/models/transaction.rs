use crate::TransactionKind;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One dated monetary movement in a user's ledger.
///
/// Transactions are immutable once created; the only mutation the system
/// knows is deletion. `category_id` is a soft reference: the category may
/// be deleted later, in which case the entry renders as uncategorized.
/// `recurring_rule_id` is set only on entries materialized by the rule
/// engine and backs the per-occurrence uniqueness guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category_id: Option<Uuid>,
    pub recurring_rule_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: Uuid,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
        description: Option<String>,
        category_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            description,
            date,
            kind,
            category_id,
            recurring_rule_id: None,
            created_at: Utc::now(),
        }
    }
}
