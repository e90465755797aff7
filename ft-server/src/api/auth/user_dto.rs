use ft_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            name: u.name,
            created_at: u.created_at.timestamp(),
        }
    }
}
