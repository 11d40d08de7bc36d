use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a recorded transaction.
///
/// The serialized literals are the ones used in the stored rows: `incasare`
/// for income, `cheltuiala` for expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    #[serde(rename = "incasare")]
    Income,
    #[serde(rename = "cheltuiala")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "incasare",
            TransactionKind::Expense => "cheltuiala",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "incasare" => Ok(TransactionKind::Income),
            "cheltuiala" => Ok(TransactionKind::Expense),
            other => Err(format!("unknown transaction kind '{other}'")),
        }
    }
}

/// A single recorded income or expense event. Immutable once appended; the
/// log never mutates or deletes records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: f64,
    pub account: String,
    pub category: String,
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: f64,
        account: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            kind,
            amount,
            account: account.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_literals() {
        assert_eq!(TransactionKind::Income.as_str(), "incasare");
        assert_eq!(TransactionKind::Expense.as_str(), "cheltuiala");
        assert_eq!(
            "incasare".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            "cheltuiala".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
