pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::budget_repository::BudgetRepository;
pub use repositories::category_repository::CategoryRepository;
pub use repositories::recurring_rule_repository::RecurringRuleRepository;
pub use repositories::transaction_repository::TransactionRepository;
pub use repositories::user_repository::UserRepository;
