use serde::Serialize;

/// Body returned by the run-check endpoint: how many occurrences were
/// materialized in this pass.
#[derive(Debug, Serialize)]
pub struct RunCheckResponse {
    pub processed: u64,
}
