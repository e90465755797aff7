pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        user_dto::UserDto,
    },
    budgets::{
        budget_dto::BudgetDto,
        budget_list_response::BudgetListResponse,
        budget_response::BudgetResponse,
        budgets::{delete_budget, list_budgets, upsert_budget},
        list_budgets_query::ListBudgetsQuery,
        upsert_budget_request::UpsertBudgetRequest,
    },
    categories::{
        categories::{create_category, delete_category, list_categories},
        category_dto::CategoryDto,
        category_list_response::CategoryListResponse,
        category_response::CategoryResponse,
        create_category_request::CreateCategoryRequest,
    },
    data::{
        export::{ExportResponse, export},
        import::{ImportRequest, ImportResponse, import},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    recurring::{
        create_rule_request::CreateRuleRequest,
        recurring::{create_rule, delete_rule, list_rules, run_check},
        rule_dto::RuleDto,
        rule_list_response::RuleListResponse,
        rule_response::RuleResponse,
        run_check_response::RunCheckResponse,
    },
    transactions::{
        create_transaction_request::CreateTransactionRequest,
        list_transactions_query::ListTransactionsQuery,
        transaction_dto::TransactionDto,
        transaction_list_response::TransactionListResponse,
        transaction_response::TransactionResponse,
        transactions::{create_transaction, delete_transaction, list_transactions},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
