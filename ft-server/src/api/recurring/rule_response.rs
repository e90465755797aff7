use crate::RuleDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RuleResponse {
    pub rule: RuleDto,
}
