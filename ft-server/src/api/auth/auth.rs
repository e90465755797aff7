//! Registration and login handlers
//!
//! Wrong email and wrong password produce the identical 401 so the API
//! cannot be used to probe which accounts exist.

use crate::{ApiError, ApiResult, AuthResponse, LoginRequest, RegisterRequest};
use crate::state::AppState;

use ft_core::{ErrorLocation, User};
use ft_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/v1/auth/register
///
/// Create an account and issue a first token
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if !request.email.contains('@') {
        return Err(ApiError::Validation {
            message: "Email must contain '@'".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if request.password.len() < 6 {
        return Err(ApiError::Validation {
            message: "Password must be at least 6 characters".to_string(),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if request.name.trim().len() < 2 {
        return Err(ApiError::Validation {
            message: "Name must be at least 2 characters".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());

    if repo.find_by_email(&request.email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "Email already registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash =
        ft_auth::password::hash_password(&request.password).map_err(|e| ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let user = User::new(request.email, password_hash, request.name.trim().to_string());
    repo.create(&user).await?;

    log::info!("Registered user {}", user.id);

    let token = state
        .token_issuer
        .issue(user.id, &user.email)
        .map_err(|e| ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.into(),
            token,
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Verify credentials and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo.find_by_email(&request.email).await?;

    // One failure path for unknown email and wrong password
    let invalid = || ApiError::Unauthorized {
        message: "Invalid email or password".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let user = user.ok_or_else(invalid)?;

    let verified = ft_auth::password::verify_password(&request.password, &user.password_hash)
        .map_err(|e| ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !verified {
        return Err(invalid());
    }

    let token = state
        .token_issuer
        .issue(user.id, &user.email)
        .map_err(|e| ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}
