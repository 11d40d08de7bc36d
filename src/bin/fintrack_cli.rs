use std::process::ExitCode;

use fintrack::cli::{output, run_cli};

fn main() -> ExitCode {
    fintrack::init();
    if let Err(err) = run_cli() {
        output::error(err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
