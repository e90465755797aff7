use crate::TransactionKind;

use chrono::NaiveDate;
use serde::Deserialize;

/// One row of bulk-imported ledger data.
///
/// Rows carry a category *name* rather than an id: the import bridge looks
/// the name up per (user, name, kind) and creates the category on first
/// sight.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRow {
    pub date: NaiveDate,
    pub amount: f64,
    pub description: Option<String>,
    pub kind: TransactionKind,
    pub category_name: String,
}
