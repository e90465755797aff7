use crate::TransactionDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction: TransactionDto,
}
