pub mod auth;
pub mod budgets;
pub mod categories;
pub mod data;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod recurring;
pub mod transactions;
