use std::sync::Mutex;

use crate::errors::{Result, TrackerError};
use crate::ledger::{AccountBook, Transaction};

use super::{AccountStore, TransactionStore};

/// In-memory store implementing both persistence traits. Used by tests and
/// throwaway sessions that should not touch the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    transactions: Mutex<Vec<Transaction>>,
    accounts: Mutex<AccountBook>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> TrackerError {
    TrackerError::Storage("memory store lock poisoned".to_string())
}

impl TransactionStore for MemoryStore {
    fn append(&self, transaction: &Transaction) -> Result<()> {
        let mut guard = self.transactions.lock().map_err(|_| poisoned())?;
        guard.push(transaction.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Transaction>> {
        let guard = self.transactions.lock().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }
}

impl AccountStore for MemoryStore {
    fn load(&self) -> Result<AccountBook> {
        let guard = self.accounts.lock().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    fn save(&self, book: &AccountBook) -> Result<()> {
        let mut guard = self.accounts.lock().map_err(|_| poisoned())?;
        *guard = book.clone();
        Ok(())
    }
}
