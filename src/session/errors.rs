use thiserror::Error;

use crate::models::LedgerError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Input error: Unterminated quote")]
    UnterminatedQuote
}
