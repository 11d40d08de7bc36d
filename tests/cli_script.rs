use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn script_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fintrack_cli").expect("binary builds");
    cmd.env("FINTRACK_CLI_SCRIPT", "1")
        .env("FINTRACK_DATA_DIR", data_dir);
    cmd
}

#[test]
fn records_and_reports_through_script_mode() {
    let temp = tempdir().unwrap();
    script_cmd(temp.path())
        .write_stdin(
            "income 100 Cash salary\n\
             expense 30 Cash food lunch\n\
             stats\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Total income:   100.00 RON"))
        .stdout(predicate::str::contains("Total expenses: 30.00 RON"))
        .stdout(predicate::str::contains("Cash: 70.00 RON"));
}

#[test]
fn stats_shows_log_derived_balances_next_to_stored_ones() {
    let temp = tempdir().unwrap();
    script_cmd(temp.path())
        .write_stdin(
            "income 100 Cash salary\n\
             account-edit Cash 999\n\
             stats\n\
             exit\n",
        )
        .assert()
        .success()
        // Stored balance reflects the override, the log-derived one does not.
        .stdout(predicate::str::contains("Cash: 999.00 RON"))
        .stdout(predicate::str::contains("Balances from transaction log"))
        .stdout(predicate::str::contains("Cash: 100.00 RON"));
}

#[test]
fn transactions_persist_across_invocations() {
    let temp = tempdir().unwrap();
    script_cmd(temp.path())
        .write_stdin("expense 12.5 Card food groceries\nexit\n")
        .assert()
        .success();

    script_cmd(temp.path())
        .write_stdin("transactions\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cheltuiala"))
        .stdout(predicate::str::contains("groceries"));
}

#[test]
fn account_lifecycle_warns_on_nonzero_delete() {
    let temp = tempdir().unwrap();
    script_cmd(temp.path())
        .write_stdin(
            "account-add Cash 50\n\
             account-delete Cash\n\
             accounts\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("still held 50.00 RON"))
        .stdout(predicate::str::contains("Account 'Cash' deleted."))
        .stdout(predicate::str::contains("No accounts."));
}

#[test]
fn invalid_input_is_reported_without_aborting() {
    let temp = tempdir().unwrap();
    script_cmd(temp.path())
        .write_stdin(
            "income -5 Cash salary\n\
             bogus\n\
             transactions\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("amount must be a non-negative number"))
        .stdout(predicate::str::contains("unknown command 'bogus'"))
        .stdout(predicate::str::contains("No transactions recorded."));
}

#[test]
fn category_chart_shows_expense_distribution() {
    let temp = tempdir().unwrap();
    script_cmd(temp.path())
        .write_stdin(
            "expense 10 Cash food\n\
             expense 5 Cash food\n\
             income 100 Cash salary\n\
             categories\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("15.00 RON"))
        .stdout(predicate::str::contains("100.0%"));
}
