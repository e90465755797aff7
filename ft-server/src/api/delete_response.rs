use serde::Serialize;

/// Uniform body for every DELETE endpoint.
///
/// Deleting something that does not exist, or that belongs to another
/// user, is not an error: the caller simply sees `affected: 0`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub affected: u64,
}
