//! Single write path over the transaction log and the account book.
//!
//! Every recorded transaction goes through [`Tracker::record`], which appends
//! to the log and updates the matching balance in the same call, so the two
//! files cannot drift apart.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::errors::{Result, TrackerError};
use crate::ledger::{AccountBook, Transaction, TransactionKind};
use crate::stats::{self, KindTotals};
use crate::storage::{AccountStore, TransactionStore};

/// Outcome of an account deletion. A non-zero removed balance is a warning
/// signal for the caller, never a block.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedAccount {
    pub name: String,
    pub balance: f64,
}

impl DeletedAccount {
    pub fn had_nonzero_balance(&self) -> bool {
        self.balance != 0.0
    }
}

pub struct Tracker {
    log: Box<dyn TransactionStore>,
    accounts: Box<dyn AccountStore>,
}

impl Tracker {
    pub fn new(log: Box<dyn TransactionStore>, accounts: Box<dyn AccountStore>) -> Self {
        Self { log, accounts }
    }

    /// Records a transaction dated today.
    pub fn record(
        &self,
        kind: TransactionKind,
        amount: f64,
        account: &str,
        category: &str,
        description: &str,
    ) -> Result<Transaction> {
        self.record_on(Local::now().date_naive(), kind, amount, account, category, description)
    }

    /// Records a transaction with an explicit date. Appends to the log, then
    /// applies the amount to the account balance, creating the account with a
    /// zero balance when it is unknown.
    pub fn record_on(
        &self,
        date: NaiveDate,
        kind: TransactionKind,
        amount: f64,
        account: &str,
        category: &str,
        description: &str,
    ) -> Result<Transaction> {
        validate_amount(amount)?;
        let account = validate_name("account", account)?;
        let category = validate_name("category", category)?;
        let transaction =
            Transaction::new(date, kind, amount, account, category, description.trim());
        self.log.append(&transaction)?;
        let mut book = self.accounts.load()?;
        book.apply(kind, amount, account);
        self.accounts.save(&book)?;
        info!(kind = %kind, amount, account, "transaction recorded");
        Ok(transaction)
    }

    /// Full log snapshot in append order.
    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        self.log.load_all()
    }

    pub fn totals(&self) -> Result<KindTotals> {
        Ok(stats::totals(&self.log.load_all()?))
    }

    pub fn monthly(&self) -> Result<BTreeMap<String, KindTotals>> {
        Ok(stats::monthly_breakdown(&self.log.load_all()?))
    }

    pub fn weekly(&self) -> Result<BTreeMap<String, KindTotals>> {
        Ok(stats::weekly_breakdown(&self.log.load_all()?))
    }

    pub fn by_category(&self) -> Result<BTreeMap<String, f64>> {
        Ok(stats::category_breakdown(&self.log.load_all()?))
    }

    pub fn monthly_balance(&self) -> Result<Vec<(String, f64)>> {
        Ok(stats::monthly_balance_series(&self.log.load_all()?))
    }

    /// Per-account net recomputed from the log alone, ignoring stored
    /// balances and administrative edits.
    pub fn balances_from_log(&self) -> Result<BTreeMap<String, f64>> {
        Ok(stats::balance_by_account(&self.log.load_all()?))
    }

    pub fn accounts(&self) -> Result<AccountBook> {
        self.accounts.load()
    }

    pub fn create_account(&self, name: &str, initial_balance: f64) -> Result<()> {
        let name = validate_name("account", name)?;
        validate_balance(initial_balance)?;
        let mut book = self.accounts.load()?;
        book.create(name, initial_balance)?;
        self.accounts.save(&book)?;
        info!(account = name, balance = initial_balance, "account created");
        Ok(())
    }

    /// Administrative balance override. The ledger does not reconcile the
    /// log against the new balance afterwards.
    pub fn edit_account(&self, name: &str, new_balance: f64) -> Result<()> {
        let name = validate_name("account", name)?;
        validate_balance(new_balance)?;
        let mut book = self.accounts.load()?;
        book.set_balance(name, new_balance)?;
        self.accounts.save(&book)?;
        info!(account = name, balance = new_balance, "account balance overridden");
        Ok(())
    }

    /// Deletes the account and reports the removed balance. Deletion
    /// proceeds even when the balance is non-zero; confirming with the user
    /// first is a presentation concern.
    pub fn delete_account(&self, name: &str) -> Result<DeletedAccount> {
        let name = validate_name("account", name)?;
        let mut book = self.accounts.load()?;
        let balance = book.remove(name)?;
        self.accounts.save(&book)?;
        let deleted = DeletedAccount {
            name: name.to_string(),
            balance,
        };
        if deleted.had_nonzero_balance() {
            warn!(account = name, balance, "deleted account with non-zero balance");
        } else {
            info!(account = name, "account deleted");
        }
        Ok(deleted)
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(TrackerError::Validation(format!(
            "amount must be a non-negative number, got {amount}"
        )));
    }
    Ok(())
}

fn validate_balance(balance: f64) -> Result<()> {
    if !balance.is_finite() {
        return Err(TrackerError::Validation(format!(
            "balance must be a finite number, got {balance}"
        )));
    }
    Ok(())
}

fn validate_name<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
