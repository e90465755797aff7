use crate::BudgetDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BudgetListResponse {
    pub budgets: Vec<BudgetDto>,
}
