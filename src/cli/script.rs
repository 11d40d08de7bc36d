//! Line-oriented script mode: commands read from stdin, one per line,
//! parsed with shell quoting rules. Used by non-interactive callers and the
//! CLI smoke tests.

use std::io::{self, BufRead};

use crate::config::Config;
use crate::ledger::TransactionKind;
use crate::tracker::Tracker;

use super::{output, views, CliError};

enum LoopControl {
    Continue,
    Exit,
}

pub fn run(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens = match shell_words::split(trimmed) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::error(format!("unbalanced quoting: {err}"));
                continue;
            }
        };
        match execute(tracker, config, &tokens) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(CliError::Core(err)) => output::error(err),
            Err(CliError::Input(message)) => output::error(message),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn execute(
    tracker: &Tracker,
    config: &Config,
    tokens: &[String],
) -> Result<LoopControl, CliError> {
    let (command, args) = match tokens.split_first() {
        Some((command, args)) => (command.as_str(), args),
        None => return Ok(LoopControl::Continue),
    };

    match command {
        "income" => record(tracker, TransactionKind::Income, args)?,
        "expense" => record(tracker, TransactionKind::Expense, args)?,
        "transactions" => output::info(views::transactions_table(&tracker.transactions()?)),
        "stats" => {
            output::section("General statistics");
            output::info(views::totals_view(&tracker.totals()?, &config.currency));
            output::section("Current balances");
            output::info(views::balances_view(&tracker.accounts()?, &config.currency));
            output::section("Balances from transaction log");
            output::info(views::log_balances_view(
                &tracker.balances_from_log()?,
                &config.currency,
            ));
        }
        "monthly" => output::info(views::breakdown_view(&tracker.monthly()?, &config.currency)),
        "weekly" => output::info(views::breakdown_view(&tracker.weekly()?, &config.currency)),
        "categories" => {
            output::info(views::category_chart(&tracker.by_category()?, &config.currency))
        }
        "balance-chart" => {
            output::info(views::balance_chart(&tracker.monthly_balance()?, &config.currency))
        }
        "accounts" => output::info(views::balances_view(&tracker.accounts()?, &config.currency)),
        "account-add" => {
            let (name, balance) = name_and_amount(command, args)?;
            tracker.create_account(&name, balance)?;
            output::success(format!("Account '{name}' created."));
        }
        "account-edit" => {
            let (name, balance) = name_and_amount(command, args)?;
            tracker.edit_account(&name, balance)?;
            output::success(format!("Account '{name}' updated."));
        }
        "account-delete" => {
            let name = match args {
                [name] => name.clone(),
                _ => return Err(usage(command, "account-delete <name>")),
            };
            let deleted = tracker.delete_account(&name)?;
            if deleted.had_nonzero_balance() {
                output::warning(format!(
                    "Deleted account '{}' still held {}.",
                    deleted.name,
                    views::format_amount(deleted.balance, &config.currency)
                ));
            }
            output::success(format!("Account '{name}' deleted."));
        }
        "help" => output::info(HELP),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => return Err(CliError::Input(format!("unknown command '{other}'"))),
    }
    Ok(LoopControl::Continue)
}

fn record(tracker: &Tracker, kind: TransactionKind, args: &[String]) -> Result<(), CliError> {
    let [amount, account, category, description @ ..] = args else {
        return Err(usage(
            kind.as_str(),
            "income|expense <amount> <account> <category> [description...]",
        ));
    };
    let amount: f64 = amount
        .parse()
        .map_err(|_| CliError::Input(format!("invalid amount '{amount}'")))?;
    tracker.record(kind, amount, account, category, &description.join(" "))?;
    output::success("Transaction recorded.");
    Ok(())
}

fn name_and_amount(command: &str, args: &[String]) -> Result<(String, f64), CliError> {
    let [name, balance] = args else {
        return Err(usage(command, "<name> <balance>"));
    };
    let balance: f64 = balance
        .parse()
        .map_err(|_| CliError::Input(format!("invalid balance '{balance}'")))?;
    Ok((name.clone(), balance))
}

fn usage(command: &str, expected: &str) -> CliError {
    CliError::Input(format!("usage for {command}: {expected}"))
}

const HELP: &str = "\
Commands:
  income <amount> <account> <category> [description...]
  expense <amount> <account> <category> [description...]
  transactions
  stats
  monthly
  weekly
  categories
  balance-chart
  accounts
  account-add <name> <balance>
  account-edit <name> <balance>
  account-delete <name>
  help
  exit";
