pub mod error_location;

// -------------------------------------------------------------------------- //

pub use error_location::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid transaction kind: {value} {location}")]
    InvalidTransactionKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid frequency: {value} {location}")]
    InvalidFrequency {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date: {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
