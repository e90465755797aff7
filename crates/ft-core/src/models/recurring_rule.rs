use crate::{Frequency, Transaction, TransactionKind};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix marking ledger entries generated by the rule engine.
pub const GENERATED_PREFIX: &str = "[Recurring]";

/// A repeating-transaction template.
///
/// `next_run` is the rule's cursor: the date of the next occurrence still
/// to be materialized. It starts at `start_date` and only ever moves
/// forward, one period at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringRule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub kind: TransactionKind,
    pub category_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub next_run: NaiveDate,
    pub active: bool,

    pub created_at: DateTime<Utc>,
}

impl RecurringRule {
    pub fn new(
        user_id: Uuid,
        amount: f64,
        kind: TransactionKind,
        frequency: Frequency,
        start_date: NaiveDate,
        description: Option<String>,
        category_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            description,
            frequency,
            kind,
            category_id,
            start_date,
            next_run: start_date,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Whether the rule has an occurrence to post as of `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.active && self.next_run <= today
    }

    /// Build the ledger entry for the rule's current occurrence.
    ///
    /// The entry is dated `next_run`, not the check time, so the logical
    /// occurrence date survives a late check.
    pub fn materialize(&self) -> Transaction {
        let description = match &self.description {
            Some(d) => format!("{} {}", GENERATED_PREFIX, d),
            None => GENERATED_PREFIX.to_string(),
        };

        Transaction {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            amount: self.amount,
            description: Some(description),
            date: self.next_run,
            kind: self.kind,
            category_id: self.category_id,
            recurring_rule_id: Some(self.id),
            created_at: Utc::now(),
        }
    }
}
