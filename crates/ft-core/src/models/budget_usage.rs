use crate::Budget;

use serde::Serialize;

/// A budget enriched with actual spending. Derived on every read, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetUsage {
    pub budget: Budget,
    pub category_name: Option<String>,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
}

impl BudgetUsage {
    /// Derive usage figures from a cap and the month's expense total.
    ///
    /// Percentage is defined as 0 when nothing was spent; the cap is
    /// validated positive at creation so the division cannot blow up on
    /// the normal path.
    pub fn compute(budget: Budget, category_name: Option<String>, spent: f64) -> Self {
        let percentage = if spent > 0.0 {
            spent / budget.amount * 100.0
        } else {
            0.0
        };
        let remaining = budget.amount - spent;

        Self {
            budget,
            category_name,
            spent,
            remaining,
            percentage,
        }
    }
}
