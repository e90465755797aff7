use crate::RuleDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RuleListResponse {
    pub rules: Vec<RuleDto>,
}
