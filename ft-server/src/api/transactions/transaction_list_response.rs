use crate::TransactionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionDto>,
}
