#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records expenses in an in-memory ledger with undo, and
//! highlights the rows matching an amount or category filter.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod filter;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
