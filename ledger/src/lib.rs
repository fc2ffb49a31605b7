//! External-ledger boundary for the ORO token engine.
//!
//! The committed token state (supply counter, per-holder balances) is
//! owned by an external collaborator. This crate defines the boundary the
//! accounting core talks to — named state cells, balance deltas, and the
//! compare-and-swap [`Proposal`] — plus a thread-safe in-memory
//! implementation used by tests and embeddings.

pub mod error;
pub mod ledger;
pub mod memory;

pub use error::LedgerError;
pub use ledger::{BalanceDelta, Cell, Proposal, TokenLedger};
pub use memory::MemoryLedger;
