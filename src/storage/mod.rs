//! Persistence seams for the transaction log and the account book.
//!
//! The tracker only sees these traits, so tests run against [`MemoryStore`]
//! while the CLI wires in the file-backed stores.

pub mod csv_log;
pub mod json_accounts;
pub mod memory;

use crate::errors::Result;
use crate::ledger::{AccountBook, Transaction};

/// Append-only persistence for recorded transactions.
pub trait TransactionStore: Send + Sync {
    /// Appends one record without touching prior rows.
    fn append(&self, transaction: &Transaction) -> Result<()>;

    /// Returns all recorded transactions in insertion order. Missing backing
    /// storage yields an empty list, not an error.
    fn load_all(&self) -> Result<Vec<Transaction>>;
}

/// Whole-mapping persistence for account balances.
pub trait AccountStore: Send + Sync {
    /// Returns the full name to balance mapping; empty when no storage
    /// exists yet.
    fn load(&self) -> Result<AccountBook>;

    /// Overwrites the entire persisted mapping.
    fn save(&self, book: &AccountBook) -> Result<()>;
}

pub use csv_log::CsvTransactionLog;
pub use json_accounts::JsonAccountStore;
pub use memory::MemoryStore;
