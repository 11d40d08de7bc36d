//! Ledger domain models: transactions and the account balance book.

pub mod account;
pub mod transaction;

pub use account::AccountBook;
pub use transaction::{Transaction, TransactionKind};
