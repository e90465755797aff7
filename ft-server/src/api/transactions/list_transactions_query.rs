use serde::Deserialize;

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Maximum number of ledger entries to return
    #[serde(default = "default_limit")]
    pub limit: i64,
}
