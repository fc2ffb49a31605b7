//! Ledger boundary errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The proposal's expected supply no longer matches the committed
    /// value; a concurrent commit landed first. Retrying is the caller's
    /// responsibility, starting from a fresh read.
    #[error("stale read: expected supply {expected}, current is {current}")]
    StaleRead { expected: u64, current: u64 },

    #[error("insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("arithmetic overflow applying balance delta")]
    Overflow,
}
