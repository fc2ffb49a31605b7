//! Thread-safe in-memory ledger for tests and embeddings.

use crate::error::LedgerError;
use crate::ledger::{BalanceDelta, Cell, Proposal, TokenLedger};
use oro_types::{Amount, PublicKey};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// An in-memory ledger backing the supply counter and holder balances.
///
/// Independent callers may race on the same instance; losers of the race
/// observe [`LedgerError::StaleRead`]. All validation happens against a
/// staged view before any committed cell is written, so a rejected
/// proposal has no effect at all.
pub struct MemoryLedger {
    inner: Mutex<Cells>,
}

struct Cells {
    supply: Amount,
    balances: HashMap<PublicKey, Amount>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Cells {
                supply: Amount::ZERO,
                balances: HashMap::new(),
            }),
        }
    }

    /// Sum of all holder balances. Checked against the supply counter in
    /// tests; the accounting rules keep the two equal by construction.
    pub fn balance_total(&self) -> Amount {
        let cells = self.inner.lock().unwrap();
        let total: u64 = cells.balances.values().map(|a| a.raw()).sum();
        Amount::new(total)
    }

    /// Snapshot of every committed cell, for whole-state comparisons.
    pub fn snapshot(&self) -> (Amount, Vec<(PublicKey, Amount)>) {
        let cells = self.inner.lock().unwrap();
        let mut balances: Vec<_> = cells
            .balances
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        balances.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        (cells.supply, balances)
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for MemoryLedger {
    fn read(&self, cell: &Cell) -> Amount {
        let cells = self.inner.lock().unwrap();
        match cell {
            Cell::Supply => cells.supply,
            Cell::Balance(holder) => {
                cells.balances.get(holder).copied().unwrap_or(Amount::ZERO)
            }
        }
    }

    fn propose_if(&self, proposal: &Proposal) -> Result<(), LedgerError> {
        let mut cells = self.inner.lock().unwrap();

        if cells.supply != proposal.expected_supply {
            debug!(
                expected = proposal.expected_supply.raw(),
                current = cells.supply.raw(),
                "proposal rejected: supply counter moved"
            );
            return Err(LedgerError::StaleRead {
                expected: proposal.expected_supply.raw(),
                current: cells.supply.raw(),
            });
        }

        // Stage the touched balances first; commit only once every delta
        // is known to apply.
        let mut staged: HashMap<PublicKey, Amount> = HashMap::new();
        for delta in &proposal.deltas {
            match delta {
                BalanceDelta::Credit { holder, amount } => {
                    let current = staged_balance(&staged, &cells, holder);
                    let next = current
                        .checked_add(*amount)
                        .ok_or(LedgerError::Overflow)?;
                    staged.insert(holder.clone(), next);
                }
                BalanceDelta::Debit { holder, amount } => {
                    let current = staged_balance(&staged, &cells, holder);
                    let next = current.checked_sub(*amount).ok_or(
                        LedgerError::InsufficientFunds {
                            needed: amount.raw(),
                            available: current.raw(),
                        },
                    )?;
                    staged.insert(holder.clone(), next);
                }
            }
        }

        cells.supply = proposal.new_supply;
        cells.balances.extend(staged);
        debug!(
            supply = cells.supply.raw(),
            deltas = proposal.deltas.len(),
            "proposal committed"
        );
        Ok(())
    }
}

fn staged_balance(
    staged: &HashMap<PublicKey, Amount>,
    cells: &Cells,
    holder: &PublicKey,
) -> Amount {
    staged
        .get(holder)
        .or_else(|| cells.balances.get(holder))
        .copied()
        .unwrap_or(Amount::ZERO)
}
