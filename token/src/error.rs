//! Token operation errors.
//!
//! Four kinds, each aborting the whole operation with no ledger effect:
//! failed authorization, a debit exceeding available funds, an addition
//! leaving the representable range, and a compare-and-swap rejection.

use oro_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The signature/identity check did not hold. The caller must
    /// re-authorize; nothing was committed.
    #[error("authorization failed: evidence does not verify for the required signer")]
    AuthorizationFailed,

    /// Requested debit exceeds the available balance or supply. Expected
    /// in normal operation; a caller error, not a defect.
    #[error("insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    /// Addition would exceed the 64-bit range; the supplied amount is out
    /// of valid bounds.
    #[error("arithmetic overflow: amount out of representable range")]
    Overflow,

    /// A concurrent commit invalidated this operation's premise. Not
    /// fatal; the caller retries from a fresh read.
    #[error("stale read: expected supply {expected}, current is {current}")]
    StaleRead { expected: u64, current: u64 },
}

impl From<LedgerError> for TokenError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::StaleRead { expected, current } => {
                TokenError::StaleRead { expected, current }
            }
            LedgerError::InsufficientFunds { needed, available } => {
                TokenError::InsufficientFunds { needed, available }
            }
            LedgerError::Overflow => TokenError::Overflow,
        }
    }
}
