use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly spending cap for one category.
///
/// (user_id, category_id, month, year) is unique at the storage layer;
/// upsert semantics depend on that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    pub month: u32,
    pub year: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(user_id: Uuid, category_id: Uuid, amount: f64, month: u32, year: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            category_id,
            amount,
            month,
            year,
            created_at: now,
            updated_at: now,
        }
    }
}
