//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use ft_core::ErrorLocation;
use uuid::Uuid;

/// Extracts the authenticated user's id from the request.
///
/// Reads the `Authorization: Bearer <token>` header, validates the token
/// signature and expiry, and parses the `sub` claim. Any failure is a 401
/// with no partial data.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(axum::http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Missing authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header
                .strip_prefix("Bearer ")
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Expected 'Bearer' authorization scheme".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate(token)?;

            let user_id =
                Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized {
                    message: "Invalid or missing credentials".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            Ok(UserId(user_id))
        }
    }
}
