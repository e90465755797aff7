use crate::{CoreError, CoreResult, ErrorLocation};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a monetary movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
    Saving,
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
            Self::Saving => "SAVING",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            "SAVING" => Ok(Self::Saving),
            _ => Err(CoreError::InvalidTransactionKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
