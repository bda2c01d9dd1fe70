use tracing::debug;

use crate::ledger::{Filter, SortOrder, Totals};
use crate::models::{LedgerError, NewTransaction, Transaction, TransactionUpdate};
use crate::types::TransactionId;

/// Owns every recorded transaction in insertion order.
///
/// Operations validate completely before touching the collection, so a failed call
/// leaves the store exactly as it was.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    /// `None` once the largest id has been issued.
    next_id: Option<TransactionId>
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: Some(1)
        }
    }

    /// Rebuilds a store from previously saved records, keeping their ids and order.
    ///
    /// The records are expected to be valid with unique ids; new ids continue after the largest one.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions.iter()
            .map(|transaction| transaction.id)
            .max()
            .map_or(Some(1), |id| id.checked_add(1));

        Self { transactions, next_id }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, transaction_id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == transaction_id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Validates the field set, assigns a fresh id and appends the record.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - The resulting record breaks an invariant.
    /// - Every id up to `TransactionId::MAX` has already been issued.
    pub fn add(&mut self, fields: NewTransaction) -> Result<Transaction, LedgerError> {
        let id = self.next_id.ok_or(LedgerError::IdsExhausted)?;
        let transaction = fields.into_transaction(id);
        transaction.validate()?;

        self.next_id = id.checked_add(1);
        self.transactions.push(transaction.clone());

        debug!("Transaction [{}]:[{}] added", transaction.id, transaction.category);

        Ok(transaction)
    }

    /// Removes the transaction and returns it. Remaining ids are left as they are.
    pub fn delete(&mut self, transaction_id: TransactionId) -> Result<Transaction, LedgerError> {
        let index = self.position(transaction_id)?;
        let transaction = self.transactions.remove(index);

        debug!("Transaction [{}]:[{}] deleted", transaction.id, transaction.category);

        Ok(transaction)
    }

    /// Applies a partial update and returns the updated record.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - No transaction has the given id.
    /// - The update is empty or the updated record breaks an invariant.
    pub fn edit(&mut self, transaction_id: TransactionId, updates: &TransactionUpdate) -> Result<Transaction, LedgerError> {
        let index = self.position(transaction_id)?;
        let updated = updates.apply_to(&self.transactions[index])?;

        self.transactions[index] = updated.clone();

        debug!("Transaction [{}]:[{}] edited", updated.id, updated.category);

        Ok(updated)
    }

    /// Returns the transactions matching `filter` in the requested order.
    pub fn list(&self, filter: &Filter, sort: SortOrder) -> Vec<&Transaction> {
        let mut matching: Vec<&Transaction> = self.transactions.iter()
            .filter(|transaction| filter.matches(transaction))
            .collect();

        sort.sort(&mut matching);

        matching
    }

    pub fn totals(&self, filter: &Filter) -> Totals {
        self.transactions.iter()
            .filter(|transaction| filter.matches(transaction))
            .fold(Totals::default(), |mut totals, transaction| {
                totals.accumulate(transaction);
                totals
            })
    }

    fn position(&self, transaction_id: TransactionId) -> Result<usize, LedgerError> {
        self.transactions.iter()
            .position(|transaction| transaction.id == transaction_id)
            .ok_or_else(|| LedgerError::not_found(transaction_id))
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
