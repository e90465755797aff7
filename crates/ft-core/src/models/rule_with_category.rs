use crate::RecurringRule;

use serde::Serialize;

/// A recurring rule joined with its category's display name for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RuleWithCategory {
    pub rule: RecurringRule,
    pub category_name: Option<String>,
}
