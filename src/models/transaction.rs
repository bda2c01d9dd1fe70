use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::errors::ValidationError;
use crate::models::{Category, Currency, ExpenseType, AMOUNT_MAX_DIGITS, DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH};
use crate::types::TransactionId;

/// A single recorded income, expense or liability.
///
/// Field order matches the columns of the data file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the store, never changes after creation.
    pub id: TransactionId,
    pub date: NaiveDate,
    pub category: Category,
    /// Set if and only if `category` is `Expense`.
    pub expense_type: Option<ExpenseType>,
    pub title: String,
    /// Non-negative magnitude in `currency`.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: Currency,
    pub description: Option<String>
}

impl Transaction {
    /// Checks the record invariants.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - The amount is negative or has more than `AMOUNT_MAX_DIGITS` integer digits.
    /// - The category is `Expense` but no expense type is set, or the reverse.
    /// - The title or description exceeds its length limit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount { amount: self.amount });
        }

        if self.amount >= Decimal::from(10_i64.pow(AMOUNT_MAX_DIGITS)) {
            return Err(ValidationError::AmountTooLarge { amount: self.amount, max_digits: AMOUNT_MAX_DIGITS });
        }

        match (self.category, self.expense_type) {
            (Category::Expense, None) => return Err(ValidationError::MissingExpenseType),
            (Category::Income | Category::Liability, Some(expense_type)) => {
                return Err(ValidationError::UnexpectedExpenseType {
                    category: self.category,
                    expense_type
                })
            }
            _ => {}
        }

        if self.title.chars().count() > TITLE_MAX_LENGTH {
            return Err(ValidationError::TitleTooLong { max: TITLE_MAX_LENGTH });
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LENGTH {
                return Err(ValidationError::DescriptionTooLong { max: DESCRIPTION_MAX_LENGTH });
            }
        }

        Ok(())
    }
}

/// The complete field set for a transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub category: Category,
    pub expense_type: Option<ExpenseType>,
    pub title: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub description: Option<String>
}

impl NewTransaction {
    /// Builds the stored form of this field set under the given id.
    ///
    /// Text fields are trimmed and a blank description becomes `None`. The result is not validated.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            category: self.category,
            expense_type: self.expense_type,
            title: self.title.trim().to_string(),
            amount: self.amount,
            currency: self.currency,
            description: normalize_description(self.description)
        }
    }
}

/// A partial update, every `Some` field replaces the stored value.
///
/// A blank `description` clears the stored description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<Category>,
    pub expense_type: Option<ExpenseType>,
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<Currency>,
    pub description: Option<String>
}

impl TransactionUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.expense_type.is_none()
            && self.title.is_none()
            && self.amount.is_none()
            && self.currency.is_none()
            && self.description.is_none()
    }

    /// Produces the updated copy of `transaction` and validates it, leaving the original untouched.
    ///
    /// Moving a record out of `Expense` without naming an expense type drops the old one.
    /// Naming an expense type while the resulting category is not `Expense` is rejected.
    pub fn apply_to(&self, transaction: &Transaction) -> Result<Transaction, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }

        let mut updated = transaction.clone();

        if let Some(date) = self.date {
            updated.date = date;
        }

        if let Some(category) = self.category {
            updated.category = category;

            if category != Category::Expense && self.expense_type.is_none() {
                updated.expense_type = None;
            }
        }

        if let Some(expense_type) = self.expense_type {
            updated.expense_type = Some(expense_type);
        }

        if let Some(title) = &self.title {
            updated.title = title.trim().to_string();
        }

        if let Some(amount) = self.amount {
            updated.amount = amount;
        }

        if let Some(currency) = self.currency {
            updated.currency = currency;
        }

        if let Some(description) = &self.description {
            updated.description = normalize_description(Some(description.clone()));
        }

        updated.validate()?;

        Ok(updated)
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
