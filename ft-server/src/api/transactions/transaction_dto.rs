use ft_core::LedgerEntry;

use serde::Serialize;

/// Display name for entries whose category was deleted or never set.
const UNCATEGORIZED: &str = "uncategorized";

/// Ledger entry DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TransactionDto {
    pub id: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: String,
    pub kind: String,
    pub category_id: Option<String>,
    pub category_name: String,
    pub recurring_rule_id: Option<String>,
    pub created_at: i64,
}

impl From<LedgerEntry> for TransactionDto {
    fn from(e: LedgerEntry) -> Self {
        let t = e.transaction;
        Self {
            id: t.id.to_string(),
            amount: t.amount,
            description: t.description,
            date: t.date.to_string(),
            kind: t.kind.as_str().to_string(),
            category_id: t.category_id.map(|id| id.to_string()),
            category_name: e
                .category_name
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            recurring_rule_id: t.recurring_rule_id.map(|id| id.to_string()),
            created_at: t.created_at.timestamp(),
        }
    }
}
