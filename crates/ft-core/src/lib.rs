pub mod error;
pub mod models;
pub mod schedule;

pub use error::{CoreError, CoreResult, ErrorLocation};
pub use models::budget::Budget;
pub use models::budget_usage::BudgetUsage;
pub use models::category::Category;
pub use models::frequency::Frequency;
pub use models::import_row::ImportRow;
pub use models::ledger_entry::LedgerEntry;
pub use models::recurring_rule::RecurringRule;
pub use models::rule_with_category::RuleWithCategory;
pub use models::transaction::Transaction;
pub use models::transaction_kind::TransactionKind;
pub use models::user::User;
