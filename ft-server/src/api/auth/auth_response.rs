use crate::UserDto;

use serde::Serialize;

/// Body returned by both register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
    pub token: String,
}
