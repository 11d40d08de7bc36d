use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Select};

use crate::config::{Config, ConfigManager};
use crate::ledger::TransactionKind;
use crate::storage::{CsvTransactionLog, JsonAccountStore};
use crate::tracker::Tracker;

use super::{forms, output, script, views, CliError};

/// Env var switching the CLI into line-oriented script mode.
pub const SCRIPT_MODE_ENV: &str = "FINTRACK_CLI_SCRIPT";
/// Env var overriding the data directory, used by script runs and tests.
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

const MENU_ITEMS: [&str; 13] = [
    "Add income",
    "Add expense",
    "List transactions",
    "General statistics",
    "Monthly statistics",
    "Weekly statistics",
    "Expenses by category",
    "Monthly balance chart",
    "Account balances",
    "Add account",
    "Edit account",
    "Delete account",
    "Exit",
];

pub fn run_cli() -> Result<(), CliError> {
    let config = resolve_config()?;
    let tracker = build_tracker(&config);

    if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        script::run(&tracker, &config)
    } else {
        run_interactive(&tracker, &config)
    }
}

fn resolve_config() -> Result<Config, CliError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        let mut config = Config::default();
        config.data_dir = Some(PathBuf::from(dir));
        return Ok(config);
    }
    let manager = ConfigManager::new()?;
    Ok(manager.load()?)
}

fn build_tracker(config: &Config) -> Tracker {
    let log = CsvTransactionLog::new(config.transactions_path());
    let accounts = JsonAccountStore::new(config.accounts_path());
    Tracker::new(Box::new(log), Box::new(accounts))
}

fn run_interactive(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Fintrack")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => add_transaction(tracker, &theme, TransactionKind::Income),
            1 => add_transaction(tracker, &theme, TransactionKind::Expense),
            2 => list_transactions(tracker),
            3 => general_statistics(tracker, config),
            4 => monthly_statistics(tracker, config),
            5 => weekly_statistics(tracker, config),
            6 => expenses_by_category(tracker, config),
            7 => monthly_balance_chart(tracker, config),
            8 => account_balances(tracker, config),
            9 => add_account(tracker, &theme),
            10 => edit_account(tracker, &theme),
            11 => delete_account(tracker, &theme, config),
            _ => break,
        };

        match outcome {
            Ok(()) => {}
            // Core rejections are reported and the menu keeps running.
            Err(CliError::Core(err)) => output::error(err),
            Err(CliError::Input(message)) => output::error(message),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn add_transaction(
    tracker: &Tracker,
    theme: &ColorfulTheme,
    kind: TransactionKind,
) -> Result<(), CliError> {
    let input = forms::transaction_form(theme)?;
    tracker.record(
        kind,
        input.amount,
        &input.account,
        &input.category,
        &input.description,
    )?;
    output::success("Transaction recorded.");
    Ok(())
}

fn list_transactions(tracker: &Tracker) -> Result<(), CliError> {
    output::section("Transactions");
    output::info(views::transactions_table(&tracker.transactions()?));
    Ok(())
}

fn general_statistics(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    output::section("General statistics");
    output::info(views::totals_view(&tracker.totals()?, &config.currency));
    output::section("Current balances");
    output::info(views::balances_view(&tracker.accounts()?, &config.currency));
    output::section("Balances from transaction log");
    output::info(views::log_balances_view(
        &tracker.balances_from_log()?,
        &config.currency,
    ));
    Ok(())
}

fn monthly_statistics(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    output::section("Monthly statistics");
    output::info(views::breakdown_view(&tracker.monthly()?, &config.currency));
    Ok(())
}

fn weekly_statistics(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    output::section("Weekly statistics");
    output::info(views::breakdown_view(&tracker.weekly()?, &config.currency));
    Ok(())
}

fn expenses_by_category(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    output::section("Expenses by category");
    output::info(views::category_chart(&tracker.by_category()?, &config.currency));
    Ok(())
}

fn monthly_balance_chart(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    output::section("Monthly balance");
    output::info(views::balance_chart(&tracker.monthly_balance()?, &config.currency));
    Ok(())
}

fn account_balances(tracker: &Tracker, config: &Config) -> Result<(), CliError> {
    output::section("Account balances");
    output::info(views::balances_view(&tracker.accounts()?, &config.currency));
    Ok(())
}

fn add_account(tracker: &Tracker, theme: &ColorfulTheme) -> Result<(), CliError> {
    let name = forms::required_text(theme, "Account name")?;
    let balance = forms::balance_prompt(theme, "Initial balance")?;
    tracker.create_account(&name, balance)?;
    output::success(format!("Account '{name}' created."));
    Ok(())
}

fn edit_account(tracker: &Tracker, theme: &ColorfulTheme) -> Result<(), CliError> {
    let book = tracker.accounts()?;
    let Some(name) = forms::select_account(theme, &book)? else {
        output::info("No accounts to edit.");
        return Ok(());
    };
    let balance = forms::balance_prompt(theme, "New balance")?;
    tracker.edit_account(&name, balance)?;
    output::success(format!("Account '{name}' updated."));
    Ok(())
}

fn delete_account(
    tracker: &Tracker,
    theme: &ColorfulTheme,
    config: &Config,
) -> Result<(), CliError> {
    let book = tracker.accounts()?;
    let Some(name) = forms::select_account(theme, &book)? else {
        output::info("No accounts to delete.");
        return Ok(());
    };
    if let Some(balance) = book.balance(&name) {
        if balance != 0.0 {
            output::warning(format!(
                "Account '{name}' still holds {}.",
                views::format_amount(balance, &config.currency)
            ));
            if !forms::confirm(theme, "Delete it anyway?", false)? {
                output::info("Deletion cancelled.");
                return Ok(());
            }
        }
    }
    tracker.delete_account(&name)?;
    output::success(format!("Account '{name}' deleted."));
    Ok(())
}
