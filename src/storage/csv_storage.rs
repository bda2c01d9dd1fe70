use std::collections::HashSet;
use std::fs::{remove_file, rename, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, info, warn};

use crate::models::Transaction;
use crate::storage::{Storage, StorageError};

const DELIMITER: u8 = b'|';
const HEADERS: [&str; 8] = ["id", "date", "category", "expense_type", "title", "amount", "currency", "description"];

/// Pipe-delimited flat file with one transaction per line under a header row.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    fn write_staging(&self, staging: &Path, transactions: &[Transaction]) -> Result<(), StorageError> {
        let file = File::create(staging).map_err(|error| StorageError::io(staging, error))?;

        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        writer.write_record(HEADERS)?;

        for transaction in transactions {
            writer.serialize(transaction)?;
        }

        writer.flush().map_err(|error| StorageError::io(staging, error))?;
        drop(writer);

        rename(staging, &self.path).map_err(|error| StorageError::io(&self.path, error))
    }
}

impl Storage for CsvStorage {
    /// Reads every record, or nothing when the file does not exist yet.
    ///
    /// # Errors
    /// Returns `StorageError` if the file cannot be read, a row cannot be parsed,
    /// a record breaks an invariant, or an id appears twice.
    fn load(&self) -> Result<Vec<Transaction>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("No data file at [{}], starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(error) => return Err(StorageError::io(&self.path, error))
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let mut transactions = Vec::new();
        let mut seen = HashSet::new();

        for (index, result) in reader.deserialize::<Transaction>().enumerate() {
            let row = index + 1;
            let transaction = result?;

            transaction.validate()
                .map_err(|source| StorageError::InvalidRecord { row, source })?;

            if !seen.insert(transaction.id) {
                return Err(StorageError::DuplicateId { row, transaction_id: transaction.id });
            }

            transactions.push(transaction);
        }

        info!("Loaded {} transactions from [{}]", transactions.len(), self.path.display());

        Ok(transactions)
    }

    /// Writes the full list to a staging file and moves it over the data file.
    ///
    /// On failure the staging file is removed and the data file keeps its previous contents.
    fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let staging = self.staging_path();

        if let Err(error) = self.write_staging(&staging, transactions) {
            match remove_file(&staging) {
                Err(cleanup) if cleanup.kind() != ErrorKind::NotFound => {
                    warn!("Could not remove staging file [{}]: {cleanup}", staging.display());
                }
                _ => {}
            }

            return Err(error);
        }

        debug!("Saved {} transactions to [{}]", transactions.len(), self.path.display());

        Ok(())
    }
}
