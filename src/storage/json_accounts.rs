use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::ledger::AccountBook;
use crate::utils::{ensure_dir, write_atomic};

use super::AccountStore;

/// Account balances persisted as one flat JSON object
/// (`{"Cash": 70.0, ...}`), fully rewritten on every save.
pub struct JsonAccountStore {
    path: PathBuf,
}

impl JsonAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountStore for JsonAccountStore {
    fn load(&self) -> Result<AccountBook> {
        if !self.path.exists() {
            return Ok(AccountBook::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, book: &AccountBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_dir(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(book)?;
        write_atomic(&self.path, &json)
    }
}
