use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Account email (required, must contain '@')
    pub email: String,

    /// Plaintext password (required, at least 6 characters)
    pub password: String,

    /// Display name (required, at least 2 characters)
    pub name: String,
}
