pub mod create_transaction_request;
pub mod list_transactions_query;
pub mod transaction_dto;
pub mod transaction_list_response;
pub mod transaction_response;
pub mod transactions;
