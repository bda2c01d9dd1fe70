mod csv_storage;
mod errors;
mod memory_storage;

use crate::models::Transaction;

pub use csv_storage::CsvStorage;
pub use errors::StorageError;
pub use memory_storage::MemoryStorage;

/// Durable home of the transaction list.
///
/// Implementations are used at session boundaries only: one `load` when the session starts and
/// one `save` of the full list after each change. Nothing is held open in between.
pub trait Storage {
    fn load(&self) -> Result<Vec<Transaction>, StorageError>;
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError>;
}
