use std::sync::Arc;

use ft_auth::{JwtValidator, TokenIssuer};
use sqlx::SqlitePool;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub token_issuer: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt_secret: &[u8]) -> Self {
        Self {
            pool,
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
            token_issuer: Arc::new(TokenIssuer::with_hs256(jwt_secret)),
        }
    }
}
