use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRuleRequest {
    /// Positive amount posted at every occurrence (required)
    pub amount: f64,

    /// "EXPENSE" or "INCOME"
    pub kind: String,

    /// "DAILY", "WEEKLY", "MONTHLY" or "YEARLY"
    pub frequency: String,

    /// ISO date of the first occurrence
    pub start_date: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional category id, copied onto every generated entry
    #[serde(default)]
    pub category_id: Option<String>,
}
