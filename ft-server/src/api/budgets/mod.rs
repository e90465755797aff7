pub mod budget_dto;
pub mod budget_list_response;
pub mod budget_response;
pub mod budgets;
pub mod list_budgets_query;
pub mod upsert_budget_request;
