pub mod budget;
pub mod budget_usage;
pub mod category;
pub mod frequency;
pub mod import_row;
pub mod ledger_entry;
pub mod recurring_rule;
pub mod rule_with_category;
pub mod transaction;
pub mod transaction_kind;
pub mod user;
