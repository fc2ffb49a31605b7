//! The simple token variant: ambient caller-identity trust, no fee.

use crate::auth::{
    operation_message, AmbientTrust, AuthorizationChecker, AuthorizationEvidence, EditPermission,
};
use crate::error::TokenError;
use crate::transition;
use oro_ledger::{BalanceDelta, Proposal, TokenLedger};
use oro_types::{Amount, PublicKey, TokenSymbol};
use tracing::debug;

/// A token whose operations carry no proof object.
///
/// Authorization is satisfied by the identity that initiated the
/// surrounding transaction; the debit leg of a transfer relies on the
/// external ledger's own "this identity approved moving its own funds"
/// rule. A distinctly weaker guarantee than the deflationary variant's
/// signature check.
pub struct SimpleToken<C = AmbientTrust> {
    symbol: TokenSymbol,
    edit_permission: EditPermission,
    checker: C,
}

impl SimpleToken<AmbientTrust> {
    /// Create the contract. The symbol and the edit permission are fixed
    /// here, exactly once; supply starts at zero.
    pub fn new(symbol: TokenSymbol) -> Self {
        Self::with_checker(symbol, AmbientTrust)
    }
}

impl<C: AuthorizationChecker> SimpleToken<C> {
    pub fn with_checker(symbol: TokenSymbol, checker: C) -> Self {
        Self {
            symbol,
            edit_permission: EditPermission::ProofOrSignature,
            checker,
        }
    }

    pub fn symbol(&self) -> &TokenSymbol {
        &self.symbol
    }

    pub fn edit_permission(&self) -> EditPermission {
        self.edit_permission
    }

    pub fn supply(&self, ledger: &impl TokenLedger) -> Amount {
        ledger.supply()
    }

    pub fn balance_of(&self, ledger: &impl TokenLedger, holder: &PublicKey) -> Amount {
        ledger.balance_of(holder)
    }

    /// Mint `amount` new units to `target`: supply and the target's
    /// balance both grow by `amount`.
    pub fn mint(
        &self,
        ledger: &impl TokenLedger,
        target: &PublicKey,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.authorize(target, target, amount)?;
        let current = ledger.supply();
        let new_supply = transition::mint_supply(current, amount)?;
        ledger.propose_if(&Proposal {
            expected_supply: current,
            new_supply,
            deltas: vec![BalanceDelta::Credit {
                holder: target.clone(),
                amount,
            }],
        })?;
        debug!(%target, %amount, supply = new_supply.raw(), "minted");
        Ok(())
    }

    /// Burn `amount` units held by `target`: supply and the target's
    /// balance both shrink by `amount`.
    pub fn burn(
        &self,
        ledger: &impl TokenLedger,
        target: &PublicKey,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.authorize(target, target, amount)?;
        let current = ledger.supply();
        let balance = ledger.balance_of(target);
        let new_supply = transition::burn_supply(current, balance, amount)?;
        ledger.propose_if(&Proposal {
            expected_supply: current,
            new_supply,
            deltas: vec![BalanceDelta::Debit {
                holder: target.clone(),
                amount,
            }],
        })?;
        debug!(%target, %amount, supply = new_supply.raw(), "burned");
        Ok(())
    }

    /// Move `amount` from `sender` to `receiver` 1:1. The supply counter
    /// is unaffected, but the commit is still conditioned on it so a
    /// racing mint or burn forces a retry from fresh reads.
    pub fn transfer(
        &self,
        ledger: &impl TokenLedger,
        sender: &PublicKey,
        receiver: &PublicKey,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.authorize(sender, receiver, amount)?;
        let current = ledger.supply();
        ledger.propose_if(&Proposal {
            expected_supply: current,
            new_supply: current,
            deltas: vec![
                BalanceDelta::Debit {
                    holder: sender.clone(),
                    amount,
                },
                BalanceDelta::Credit {
                    holder: receiver.clone(),
                    amount,
                },
            ],
        })?;
        debug!(%sender, %receiver, %amount, "transferred");
        Ok(())
    }

    fn authorize(
        &self,
        required_signer: &PublicKey,
        subject: &PublicKey,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let message = operation_message(subject, amount);
        if !self
            .checker
            .verify(&AuthorizationEvidence::Ambient, required_signer, &message)
        {
            return Err(TokenError::AuthorizationFailed);
        }
        Ok(())
    }
}
