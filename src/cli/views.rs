//! Pure text renderers for listings, summaries, and the ASCII charts.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::ledger::{AccountBook, Transaction};
use crate::stats::KindTotals;

const BAR_WIDTH: usize = 40;

pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{value:.2} {currency}")
}

pub fn transactions_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return String::from("No transactions recorded.\n");
    }
    let mut out = String::new();
    for t in transactions {
        let _ = writeln!(
            out,
            "{}  {:<10}  {:>10.2}  {:<12}  {:<12}  {}",
            t.date,
            t.kind.as_str(),
            t.amount,
            t.account,
            t.category,
            t.description
        );
    }
    out
}

pub fn totals_view(totals: &KindTotals, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total income:   {}", format_amount(totals.income, currency));
    let _ = writeln!(out, "Total expenses: {}", format_amount(totals.expense, currency));
    let _ = writeln!(out, "Net:            {}", format_amount(totals.net(), currency));
    out
}

pub fn balances_view(book: &AccountBook, currency: &str) -> String {
    if book.is_empty() {
        return String::from("No accounts.\n");
    }
    let mut out = String::new();
    for (name, balance) in book.iter() {
        let _ = writeln!(out, "{name}: {}", format_amount(balance, currency));
    }
    let _ = writeln!(out, "Total: {}", format_amount(book.total(), currency));
    out
}

/// Per-account net recomputed from the log alone, shown next to the stored
/// balances so administrative overrides are visible.
pub fn log_balances_view(balances: &BTreeMap<String, f64>, currency: &str) -> String {
    if balances.is_empty() {
        return String::from("No transactions recorded.\n");
    }
    let mut out = String::new();
    for (name, balance) in balances {
        let _ = writeln!(out, "{name}: {}", format_amount(*balance, currency));
    }
    let total: f64 = balances.values().sum();
    let _ = writeln!(out, "Total: {}", format_amount(total, currency));
    out
}

/// One line per bucket, keys already ascending in the map.
pub fn breakdown_view(buckets: &BTreeMap<String, KindTotals>, currency: &str) -> String {
    if buckets.is_empty() {
        return String::from("No transactions recorded.\n");
    }
    let mut out = String::new();
    for (key, totals) in buckets {
        let _ = writeln!(
            out,
            "{key}: income={}, expense={}",
            format_amount(totals.income, currency),
            format_amount(totals.expense, currency)
        );
    }
    out
}

/// Expense distribution per category with a percentage and a proportional
/// bar.
pub fn category_chart(categories: &BTreeMap<String, f64>, currency: &str) -> String {
    let total: f64 = categories.values().sum();
    if categories.is_empty() || total <= 0.0 {
        return String::from("No expenses recorded.\n");
    }
    let name_width = categories.keys().map(|name| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, sum) in categories {
        let share = sum / total;
        let bar_len = ((share * BAR_WIDTH as f64).round() as usize).max(1);
        let _ = writeln!(
            out,
            "{name:<name_width$}  {:>12}  {:>5.1}%  {}",
            format_amount(*sum, currency),
            share * 100.0,
            "#".repeat(bar_len)
        );
    }
    out
}

/// Signed monthly net as a horizontal bar chart. Bars are scaled to the
/// largest absolute value.
pub fn balance_chart(series: &[(String, f64)], currency: &str) -> String {
    if series.is_empty() {
        return String::from("No transactions recorded.\n");
    }
    let max = series.iter().map(|(_, net)| net.abs()).fold(0.0, f64::max);
    let mut out = String::new();
    for (month, net) in series {
        let bar_len = if max > 0.0 {
            ((net.abs() / max * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH)
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{month}  {:>+12.2} {currency}  {}",
            net,
            "#".repeat(bar_len)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;

    #[test]
    fn transactions_table_lists_rows_in_order() {
        let log = vec![
            Transaction::new(
                "2025-01-10".parse().unwrap(),
                TransactionKind::Income,
                100.0,
                "Cash",
                "salary",
                "january pay",
            ),
            Transaction::new(
                "2025-01-11".parse().unwrap(),
                TransactionKind::Expense,
                30.0,
                "Cash",
                "food",
                "",
            ),
        ];
        let table = transactions_table(&log);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("incasare"));
        assert!(lines[0].contains("january pay"));
        assert!(lines[1].contains("cheltuiala"));
    }

    #[test]
    fn totals_view_formats_currency() {
        let totals = KindTotals {
            income: 100.0,
            expense: 15.5,
        };
        let view = totals_view(&totals, "RON");
        assert!(view.contains("Total income:   100.00 RON"));
        assert!(view.contains("Total expenses: 15.50 RON"));
        assert!(view.contains("Net:            84.50 RON"));
    }

    #[test]
    fn log_balances_view_lists_nets_and_total() {
        let mut balances = BTreeMap::new();
        balances.insert("Cash".to_string(), 100.0);
        balances.insert("Card".to_string(), -30.0);
        let view = log_balances_view(&balances, "RON");
        assert!(view.contains("Cash: 100.00 RON"));
        assert!(view.contains("Card: -30.00 RON"));
        assert!(view.contains("Total: 70.00 RON"));
        assert_eq!(
            log_balances_view(&BTreeMap::new(), "RON"),
            "No transactions recorded.\n"
        );
    }

    #[test]
    fn category_chart_shows_share_per_category() {
        let mut categories = BTreeMap::new();
        categories.insert("food".to_string(), 75.0);
        categories.insert("rent".to_string(), 25.0);
        let chart = category_chart(&categories, "RON");
        assert!(chart.contains("food"));
        assert!(chart.contains("75.0%"));
        assert!(chart.contains("25.0%"));
    }

    #[test]
    fn balance_chart_scales_to_largest_value() {
        let series = vec![
            ("2025-01".to_string(), 100.0),
            ("2025-02".to_string(), -50.0),
        ];
        let chart = balance_chart(&series, "RON");
        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[0].contains("+100.00 RON"));
        assert!(lines[1].contains("-50.00 RON"));
        let first_bar = lines[0].matches('#').count();
        let second_bar = lines[1].matches('#').count();
        assert_eq!(first_bar, 40);
        assert_eq!(second_bar, 20);
    }

    #[test]
    fn empty_inputs_render_placeholders() {
        assert_eq!(transactions_table(&[]), "No transactions recorded.\n");
        assert_eq!(balances_view(&AccountBook::new(), "RON"), "No accounts.\n");
        assert_eq!(category_chart(&BTreeMap::new(), "RON"), "No expenses recorded.\n");
        assert_eq!(balance_chart(&[], "RON"), "No transactions recorded.\n");
    }
}
