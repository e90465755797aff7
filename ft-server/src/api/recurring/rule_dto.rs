use ft_core::RuleWithCategory;

use serde::Serialize;

/// Recurring rule DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct RuleDto {
    pub id: String,
    pub amount: f64,
    pub description: Option<String>,
    pub frequency: String,
    pub kind: String,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub start_date: String,
    pub next_run: String,
    pub active: bool,
    pub created_at: i64,
}

impl From<RuleWithCategory> for RuleDto {
    fn from(r: RuleWithCategory) -> Self {
        let rule = r.rule;
        Self {
            id: rule.id.to_string(),
            amount: rule.amount,
            description: rule.description,
            frequency: rule.frequency.as_str().to_string(),
            kind: rule.kind.as_str().to_string(),
            category_id: rule.category_id.map(|id| id.to_string()),
            category_name: r.category_name,
            start_date: rule.start_date.to_string(),
            next_run: rule.next_run.to_string(),
            active: rule.active,
            created_at: rule.created_at.timestamp(),
        }
    }
}
