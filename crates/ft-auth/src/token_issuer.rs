use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{Duration, Utc};
use ft_core::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Token lifetime handed out at login.
const TOKEN_VALIDITY_DAYS: i64 = 7;

/// Signs login tokens. Counterpart of [`crate::JwtValidator`].
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Issue a signed token for an authenticated user
    #[track_caller]
    pub fn issue(&self, user_id: Uuid, email: &str) -> AuthErrorResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
