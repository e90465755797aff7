use crate::Transaction;

use serde::Serialize;

/// A ledger row as read back for display or export: the transaction plus
/// its category's display name, when the category still exists.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    pub transaction: Transaction,
    /// None when the entry is uncategorized or its category was deleted.
    pub category_name: Option<String>,
}
