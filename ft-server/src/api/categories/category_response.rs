use crate::CategoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: CategoryDto,
}
