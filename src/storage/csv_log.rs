use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::errors::{Result, TrackerError};
use crate::ledger::Transaction;
use crate::utils::ensure_dir;

use super::TransactionStore;

/// File-backed transaction log.
///
/// Rows are header-less and keep the fixed column order
/// `date, kind, amount, account, category, description`. The file stays
/// human-editable; a malformed row fails the whole load with its 1-based
/// file line rather than being silently skipped.
pub struct CsvTransactionLog {
    path: PathBuf,
}

impl CsvTransactionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionStore for CsvTransactionLog {
    fn append(&self, transaction: &Transaction) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(transaction)?;
        writer.flush()?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        let mut transactions = Vec::new();
        for record in reader.deserialize::<Transaction>() {
            transactions.push(record.map_err(parse_error)?);
        }
        Ok(transactions)
    }
}

/// Maps a csv error to the physical 1-based line it came from, so the
/// message points at the right row of a hand-edited file even when blank
/// lines were skipped.
fn parse_error(err: csv::Error) -> TrackerError {
    let line = err.position().map(|pos| pos.line() as usize).unwrap_or(1);
    TrackerError::Parse {
        line,
        reason: err.to_string(),
    }
}
