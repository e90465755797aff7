use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListBudgetsQuery {
    pub month: u32,
    pub year: i32,
}
