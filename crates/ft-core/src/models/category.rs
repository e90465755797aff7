use crate::TransactionKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined label for classifying transactions and budgets.
///
/// (user, name, kind) is deliberately not unique; the import bridge uses
/// that triple to decide between reuse and creation, duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub kind: TransactionKind,

    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(user_id: Uuid, name: String, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            kind,
            created_at: Utc::now(),
        }
    }
}
