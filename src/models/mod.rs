mod errors;
mod transaction;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use errors::{LedgerError, ValidationError};
pub use transaction::{NewTransaction, Transaction, TransactionUpdate};

pub const TITLE_MAX_LENGTH: usize = 30;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;
/// Amounts carry at most this many integer digits.
pub const AMOUNT_MAX_DIGITS: u32 = 10;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    Income,
    Expense,
    Liability
}

serde_plain::derive_display_from_serialize!(Category);

/// Kind of spending, only carried by `Category::Expense` transactions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ExpenseType {
    Housing,
    Transportation,
    Food,
    Utilities,
    Insurance,
    Healthcare,
    #[serde(rename = "Financial Operations")]
    FinancialOperations,
    #[serde(rename = "Personal Spending")]
    PersonalSpending,
    Other
}

serde_plain::derive_display_from_serialize!(ExpenseType);

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Cny,
    Jpy,
    Rub,
    Hkd
}

serde_plain::derive_display_from_serialize!(Currency);
