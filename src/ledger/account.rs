use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};

use super::transaction::TransactionKind;

/// Account name to balance mapping, persisted as one flat JSON object.
///
/// Iteration order is the sorted account name order, so listings and the
/// persisted file stay stable between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AccountBook {
    balances: BTreeMap<String, f64>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self, name: &str) -> Option<f64> {
        self.balances.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.balances.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.balances.iter().map(|(name, balance)| (name.as_str(), *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Signed sum of all balances.
    pub fn total(&self) -> f64 {
        self.balances.values().sum()
    }

    /// Applies a transaction to the matching balance. An unknown account is
    /// created with a zero balance first.
    pub fn apply(&mut self, kind: TransactionKind, amount: f64, account: &str) {
        let balance = self.balances.entry(account.to_string()).or_insert(0.0);
        match kind {
            TransactionKind::Income => *balance += amount,
            TransactionKind::Expense => *balance -= amount,
        }
    }

    pub fn create(&mut self, name: &str, initial_balance: f64) -> Result<()> {
        if self.balances.contains_key(name) {
            return Err(TrackerError::AccountExists(name.to_string()));
        }
        self.balances.insert(name.to_string(), initial_balance);
        Ok(())
    }

    /// Unconditionally overwrites the stored balance for an existing account.
    pub fn set_balance(&mut self, name: &str, new_balance: f64) -> Result<()> {
        match self.balances.get_mut(name) {
            Some(balance) => {
                *balance = new_balance;
                Ok(())
            }
            None => Err(TrackerError::AccountNotFound(name.to_string())),
        }
    }

    /// Removes the account and returns the removed balance. A non-zero
    /// balance never blocks removal; surfacing the warning is the caller's
    /// concern.
    pub fn remove(&mut self, name: &str) -> Result<f64> {
        self.balances
            .remove(name)
            .ok_or_else(|| TrackerError::AccountNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_creates_missing_account_and_signs_amounts() {
        let mut book = AccountBook::new();
        book.apply(TransactionKind::Income, 100.0, "Cash");
        assert_eq!(book.balance("Cash"), Some(100.0));
        book.apply(TransactionKind::Expense, 30.0, "Cash");
        assert_eq!(book.balance("Cash"), Some(70.0));
    }

    #[test]
    fn create_rejects_duplicate_names() {
        let mut book = AccountBook::new();
        book.create("Cash", 50.0).unwrap();
        let err = book.create("Cash", 10.0).unwrap_err();
        assert!(matches!(err, TrackerError::AccountExists(name) if name == "Cash"));
    }

    #[test]
    fn set_balance_requires_existing_account() {
        let mut book = AccountBook::new();
        assert!(book.set_balance("Cash", 5.0).is_err());
        book.create("Cash", 0.0).unwrap();
        book.set_balance("Cash", 5.0).unwrap();
        assert_eq!(book.balance("Cash"), Some(5.0));
    }

    #[test]
    fn remove_returns_balance_even_when_nonzero() {
        let mut book = AccountBook::new();
        book.create("Cash", 50.0).unwrap();
        assert_eq!(book.remove("Cash").unwrap(), 50.0);
        assert!(!book.contains("Cash"));
        assert!(book.remove("Cash").is_err());
    }

    #[test]
    fn total_sums_signed_balances() {
        let mut book = AccountBook::new();
        book.create("Cash", 70.0).unwrap();
        book.create("Card", -20.0).unwrap();
        assert_eq!(book.total(), 50.0);
    }
}
