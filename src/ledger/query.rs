use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Debug, Formatter};

use clap::ValueEnum;
use rust_decimal::Decimal;

use crate::models::{Category, Currency, Transaction};

type Predicate = Box<dyn Fn(&Transaction) -> bool>;

/// Selects the transactions a `list` or `totals` call operates on.
///
/// An empty filter matches everything.
#[derive(Default)]
pub struct Filter {
    category: Option<Category>,
    predicate: Option<Predicate>
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            predicate: None
        }
    }

    /// Adds an arbitrary condition on top of the category restriction.
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Transaction) -> bool + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(category) = self.category {
            if transaction.category != category {
                return false;
            }
        }

        self.predicate.as_ref().is_none_or(|predicate| predicate(transaction))
    }
}

impl Debug for Filter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Filter")
            .field("category", &self.category)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Display order for listed transactions.
///
/// Every order is stable: records that compare equal keep their insertion order.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum SortOrder {
    /// Order in which the transactions were added.
    #[default]
    Insertion,
    /// Latest date first.
    Newest,
    /// Earliest date first.
    Oldest,
    /// Smallest amount first.
    AmountIncreasing,
    /// Largest amount first.
    AmountDecreasing,
    /// Expense type name A to Z, transactions without an expense type last.
    ExpenseType
}

impl SortOrder {
    pub fn sort(self, transactions: &mut [&Transaction]) {
        match self {
            SortOrder::Insertion => {}
            SortOrder::Newest => transactions.sort_by(|a, b| b.date.cmp(&a.date)),
            SortOrder::Oldest => transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::AmountIncreasing => transactions.sort_by(|a, b| a.amount.cmp(&b.amount)),
            SortOrder::AmountDecreasing => transactions.sort_by(|a, b| b.amount.cmp(&a.amount)),
            SortOrder::ExpenseType => transactions.sort_by_cached_key(|transaction| {
                (transaction.expense_type.is_none(), transaction.expense_type.map(|expense_type| expense_type.to_string()))
            })
        }
    }
}

/// Count and amount sums over a filtered set of transactions.
///
/// `sum` adds magnitudes across currencies without conversion; `by_currency` keeps them apart.
/// `net` counts income as positive and expenses and liabilities as negative.
///
/// Validated amounts are capped at `AMOUNT_MAX_DIGITS` integer digits, so the sums cannot overflow.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub sum: Decimal,
    pub by_currency: BTreeMap<Currency, Decimal>,
    pub net: Decimal,
    pub net_by_currency: BTreeMap<Currency, Decimal>
}

impl Totals {
    pub fn accumulate(&mut self, transaction: &Transaction) {
        let signed = match transaction.category {
            Category::Income => transaction.amount,
            Category::Expense | Category::Liability => -transaction.amount
        };

        self.count += 1;
        self.sum += transaction.amount;
        self.net += signed;

        *self.by_currency.entry(transaction.currency).or_insert(Decimal::ZERO) += transaction.amount;
        *self.net_by_currency.entry(transaction.currency).or_insert(Decimal::ZERO) += signed;
    }
}
