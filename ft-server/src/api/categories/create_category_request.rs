use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Display name (required, non-empty)
    pub name: String,

    /// "EXPENSE" or "INCOME"
    pub kind: String,
}
