use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpsertBudgetRequest {
    /// Category the cap applies to
    pub category_id: String,

    /// Monthly cap (required, positive)
    pub amount: f64,

    /// Calendar month, 1 through 12
    pub month: u32,

    /// Calendar year
    pub year: i32,
}
