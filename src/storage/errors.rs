use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ValidationError;
use crate::types::TransactionId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: Could not access [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Storage error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Storage error: Record on row [{row}] is invalid: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: ValidationError
    },
    #[error("Storage error: Duplicate transaction [{transaction_id}] on row [{row}]")]
    DuplicateId {
        row: usize,
        transaction_id: TransactionId
    }
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
