//! Password hashing and verification using Argon2id.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use ft_core::ErrorLocation;

/// Hash a password with a fresh salt.
///
/// Returns the PHC-formatted hash string that includes the salt and
/// parameters.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: format!("Failed to hash password: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a password against a stored hash.
#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> AuthErrorResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
        message: format!("Invalid password hash format: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
