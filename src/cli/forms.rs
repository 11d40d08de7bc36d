//! Interactive dialoguer prompts. Validation happens here, at the
//! presentation boundary, so bad input never reaches the tracker.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::ledger::AccountBook;

use super::CliError;

pub struct TransactionInput {
    pub amount: f64,
    pub account: String,
    pub category: String,
    pub description: String,
}

pub fn transaction_form(theme: &ColorfulTheme) -> Result<TransactionInput, CliError> {
    let amount = amount_prompt(theme, "Amount")?;
    let account = required_text(theme, "Account")?;
    let category = required_text(theme, "Category")?;
    let description = Input::<String>::with_theme(theme)
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;
    Ok(TransactionInput {
        amount,
        account,
        category,
        description,
    })
}

pub fn amount_prompt(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    let amount = Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| -> Result<(), &str> {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("amount must be a non-negative number")
            }
        })
        .interact_text()?;
    Ok(amount)
}

pub fn balance_prompt(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    let balance = Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| -> Result<(), &str> {
            if value.is_finite() {
                Ok(())
            } else {
                Err("balance must be a finite number")
            }
        })
        .interact_text()?;
    Ok(balance)
}

pub fn required_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("value must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Lets the user pick an existing account; `None` when the book is empty.
pub fn select_account(
    theme: &ColorfulTheme,
    book: &AccountBook,
) -> Result<Option<String>, CliError> {
    if book.is_empty() {
        return Ok(None);
    }
    let names: Vec<String> = book.iter().map(|(name, _)| name.to_string()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Account")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(Some(names[index].clone()))
}

pub fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
