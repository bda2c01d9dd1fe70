use std::cell::RefCell;

use crate::models::Transaction;
use crate::storage::{Storage, StorageError};

/// Keeps saved transactions for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saved: RefCell<Vec<Transaction>>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Transaction>, StorageError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        *self.saved.borrow_mut() = transactions.to_vec();
        Ok(())
    }
}
