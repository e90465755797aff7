use serde::Serialize;

/// Body returned by the upsert endpoint. Usage figures are not included;
/// the client refreshes them with a list call.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    pub id: String,
    pub category_id: String,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

impl From<ft_core::Budget> for BudgetResponse {
    fn from(b: ft_core::Budget) -> Self {
        Self {
            id: b.id.to_string(),
            category_id: b.category_id.to_string(),
            amount: b.amount,
            month: b.month,
            year: b.year,
        }
    }
}
