#![doc(test(attr(deny(warnings))))]

//! Fintrack keeps a personal finance ledger: an append-only transaction log,
//! per-account balances, and stateless summary statistics, with a text-menu
//! CLI on top.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
