//! Stateless summary statistics derived from a transaction log snapshot.
//!
//! Every function here is a single pass over the slice it is given; nothing
//! is cached between calls.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::ledger::{Transaction, TransactionKind};

/// Income and expense sums for one reporting bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KindTotals {
    pub income: f64,
    pub expense: f64,
}

impl KindTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    fn add(&mut self, kind: TransactionKind, amount: f64) {
        match kind {
            TransactionKind::Income => self.income += amount,
            TransactionKind::Expense => self.expense += amount,
        }
    }
}

/// `YYYY-MM` bucket key for a date.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// `YYYY-Www` ISO week bucket key for a date. The ISO week year can differ
/// from the calendar year around January 1st.
pub fn week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Overall income and expense sums.
pub fn totals(transactions: &[Transaction]) -> KindTotals {
    let mut totals = KindTotals::default();
    for transaction in transactions {
        totals.add(transaction.kind, transaction.amount);
    }
    totals
}

/// Income and expense sums grouped by calendar month, ascending by key.
pub fn monthly_breakdown(transactions: &[Transaction]) -> BTreeMap<String, KindTotals> {
    breakdown_by(transactions, |t| month_key(t.date))
}

/// Income and expense sums grouped by ISO calendar week, ascending by key.
pub fn weekly_breakdown(transactions: &[Transaction]) -> BTreeMap<String, KindTotals> {
    breakdown_by(transactions, |t| week_key(t.date))
}

fn breakdown_by(
    transactions: &[Transaction],
    key: impl Fn(&Transaction) -> String,
) -> BTreeMap<String, KindTotals> {
    let mut buckets: BTreeMap<String, KindTotals> = BTreeMap::new();
    for transaction in transactions {
        buckets
            .entry(key(transaction))
            .or_default()
            .add(transaction.kind, transaction.amount);
    }
    buckets
}

/// Expense sums grouped by category. Income transactions are excluded.
pub fn category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut categories: BTreeMap<String, f64> = BTreeMap::new();
    for transaction in transactions {
        if transaction.kind == TransactionKind::Expense {
            *categories.entry(transaction.category.clone()).or_insert(0.0) +=
                transaction.amount;
        }
    }
    categories
}

/// Signed monthly net (income minus expense), ascending by month. Months
/// with no recorded activity are omitted rather than zero-filled.
pub fn monthly_balance_series(transactions: &[Transaction]) -> Vec<(String, f64)> {
    monthly_breakdown(transactions)
        .into_iter()
        .map(|(month, totals)| (month, totals.net()))
        .collect()
}

/// Signed per-account net derived from the log alone, independent of any
/// stored account balances.
pub fn balance_by_account(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut balances: BTreeMap<String, f64> = BTreeMap::new();
    for transaction in transactions {
        let balance = balances.entry(transaction.account.clone()).or_insert(0.0);
        match transaction.kind {
            TransactionKind::Income => *balance += transaction.amount,
            TransactionKind::Expense => *balance -= transaction.amount,
        }
    }
    balances
}
