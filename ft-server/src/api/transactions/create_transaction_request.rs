use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Positive amount (required)
    pub amount: f64,

    /// "EXPENSE" or "INCOME"
    pub kind: String,

    /// ISO date, e.g. "2024-06-01". Unparseable or absent falls back to
    /// today.
    #[serde(default)]
    pub date: Option<String>,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional category id
    #[serde(default)]
    pub category_id: Option<String>,
}
