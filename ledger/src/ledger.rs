//! The ledger trait — named cells and conditional commits.
//!
//! Every mutation travels as a single [`Proposal`]: the supply value the
//! caller last read, the supply value it computed, and the balance deltas
//! that go with it. The ledger accepts the proposal only if the supply
//! counter is still at the expected value and every delta applies cleanly;
//! otherwise nothing changes.

use crate::error::LedgerError;
use oro_types::{Amount, PublicKey};
use serde::{Deserialize, Serialize};

/// A named state cell: the supply counter or one holder's balance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Supply,
    Balance(PublicKey),
}

/// One per-holder balance mutation carried inside a proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceDelta {
    Credit { holder: PublicKey, amount: Amount },
    Debit { holder: PublicKey, amount: Amount },
}

/// A conditional commit: assert the supply counter is still at
/// `expected_supply`, then set it to `new_supply` and apply `deltas`
/// atomically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub expected_supply: Amount,
    pub new_supply: Amount,
    pub deltas: Vec<BalanceDelta>,
}

/// Interface to the external ledger holding the committed token state.
///
/// Implementations must guarantee all-or-nothing commits: a rejected
/// proposal leaves every cell untouched. There is no internal retry on
/// [`LedgerError::StaleRead`] — re-reading may change which operation is
/// even valid, so the caller restarts from scratch.
pub trait TokenLedger {
    /// Currently committed value of a cell. A balance that has never been
    /// credited reads as zero; holder cells are created implicitly on
    /// first credit.
    fn read(&self, cell: &Cell) -> Amount;

    /// Compare-and-swap commit of a whole proposal.
    fn propose_if(&self, proposal: &Proposal) -> Result<(), LedgerError>;

    fn supply(&self) -> Amount {
        self.read(&Cell::Supply)
    }

    fn balance_of(&self, holder: &PublicKey) -> Amount {
        self.read(&Cell::Balance(holder.clone()))
    }
}
