use ft_core::BudgetUsage;

use serde::Serialize;

/// Budget DTO enriched with the month's actual spending
#[derive(Debug, Serialize)]
pub struct BudgetDto {
    pub id: String,
    pub category_id: String,
    pub category_name: Option<String>,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
}

impl From<BudgetUsage> for BudgetDto {
    fn from(u: BudgetUsage) -> Self {
        Self {
            id: u.budget.id.to_string(),
            category_id: u.budget.category_id.to_string(),
            category_name: u.category_name,
            amount: u.budget.amount,
            month: u.budget.month,
            year: u.budget.year,
            spent: u.spent,
            remaining: u.remaining,
            percentage: u.percentage,
        }
    }
}
