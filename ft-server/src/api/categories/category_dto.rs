use ft_core::Category;

use serde::Serialize;

/// Category DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub created_at: i64,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            kind: c.kind.as_str().to_string(),
            created_at: c.created_at.timestamp(),
        }
    }
}
