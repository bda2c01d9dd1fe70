use crate::models::{Category, ExpenseType};
use crate::types::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// A transaction field set that breaks one of the record invariants.
///
/// Raising one never changes the store, the caller is expected to correct the input and retry.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("Amount must not be negative, got [{amount}]")]
    NegativeAmount {
        amount: Decimal
    },
    #[error("Amount [{amount}] has more than {max_digits} integer digits")]
    AmountTooLarge {
        amount: Decimal,
        max_digits: u32
    },
    #[error("An expense type is required for [Expense] transactions")]
    MissingExpenseType,
    #[error("Expense type [{expense_type}] is not allowed for [{category}] transactions")]
    UnexpectedExpenseType {
        category: Category,
        expense_type: ExpenseType
    },
    #[error("Title is longer than {max} characters")]
    TitleTooLong {
        max: usize
    },
    #[error("Description is longer than {max} characters")]
    DescriptionTooLong {
        max: usize
    },
    #[error("No fields were given to update")]
    EmptyUpdate
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid transaction: {0}")]
    Validation(#[from] ValidationError),
    #[error("Transaction [{transaction_id}] was not found")]
    NotFound {
        transaction_id: TransactionId
    },
    #[error("No transaction ids are left to assign")]
    IdsExhausted
}

impl LedgerError {
    pub fn not_found(transaction_id: TransactionId) -> Self {
        Self::NotFound { transaction_id }
    }
}
