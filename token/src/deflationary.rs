//! The deflationary token variant: signature-gated operations and a
//! transfer fee burned out of circulation.

use crate::auth::{
    operation_message, AuthorizationChecker, AuthorizationEvidence, EditPermission, SignatureCheck,
};
use crate::error::TokenError;
use crate::transition;
use oro_ledger::{BalanceDelta, Proposal, TokenLedger};
use oro_types::{Amount, PublicKey, Signature, TokenSymbol};
use tracing::{debug, warn};

/// A token where every mutation is gated by a detached signature and
/// every transfer burns `amount / 100`.
///
/// Mint and burn signatures must come from the owner key bound at
/// creation; transfer signatures must come from the sender, over the
/// (receiver, amount) message. The receiver's consent is never checked
/// before crediting — an intentional asymmetry of this design.
pub struct DeflationaryToken<C = SignatureCheck> {
    symbol: TokenSymbol,
    owner: PublicKey,
    edit_permission: EditPermission,
    checker: C,
}

impl DeflationaryToken<SignatureCheck> {
    /// Create the contract, binding the token owner's key. The symbol and
    /// the edit permission are fixed here, exactly once; supply starts at
    /// zero.
    pub fn new(symbol: TokenSymbol, owner: PublicKey) -> Self {
        Self::with_checker(symbol, owner, SignatureCheck)
    }
}

impl<C: AuthorizationChecker> DeflationaryToken<C> {
    pub fn with_checker(symbol: TokenSymbol, owner: PublicKey, checker: C) -> Self {
        Self {
            symbol,
            owner,
            edit_permission: EditPermission::ProofOrSignature,
            checker,
        }
    }

    pub fn symbol(&self) -> &TokenSymbol {
        &self.symbol
    }

    pub fn owner(&self) -> &PublicKey {
        &self.owner
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

    /// Mint `amount` new units to `target`. The signature must be the
    /// owner's, over the (target, amount) message.
    pub fn mint(
        &self,
        ledger: &impl TokenLedger,
        target: &PublicKey,
        amount: Amount,
        signature: Signature,
    ) -> Result<(), TokenError> {
        let message = operation_message(target, amount);
        self.authorize(&self.owner, signature, &message, "mint")?;
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

    /// Burn `amount` units held by `target`. The signature must be the
    /// owner's, over the (target, amount) message.
    pub fn burn(
        &self,
        ledger: &impl TokenLedger,
        target: &PublicKey,
        amount: Amount,
        signature: Signature,
    ) -> Result<(), TokenError> {
        let message = operation_message(target, amount);
        self.authorize(&self.owner, signature, &message, "burn")?;
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

    /// Transfer with the deflationary fee. The signature must be the
    /// **sender's**, over the (receiver, amount) message.
    ///
    /// The receiver is credited the full `amount`; the fee of
    /// `amount / 100` is burned from the sender on top of it. Fee burn
    /// and transfer land in one conditional commit — both or neither.
    pub fn transfer(
        &self,
        ledger: &impl TokenLedger,
        sender: &PublicKey,
        receiver: &PublicKey,
        amount: Amount,
        signature: Signature,
    ) -> Result<(), TokenError> {
        let message = operation_message(receiver, amount);
        self.authorize(sender, signature, &message, "transfer")?;
        let current = ledger.supply();
        let outcome = transition::deflationary_transfer(current, amount)?;
        ledger.propose_if(&Proposal {
            expected_supply: current,
            new_supply: outcome.new_supply,
            deltas: vec![
                BalanceDelta::Debit {
                    holder: sender.clone(),
                    amount: outcome.debited,
                },
                BalanceDelta::Credit {
                    holder: receiver.clone(),
                    amount,
                },
            ],
        })?;
        debug!(
            %sender,
            %receiver,
            %amount,
            fee = outcome.fee.raw(),
            supply = outcome.new_supply.raw(),
            "transferred with fee"
        );
        Ok(())
    }

    fn authorize(
        &self,
        required_signer: &PublicKey,
        signature: Signature,
        message: &[u8],
        operation: &str,
    ) -> Result<(), TokenError> {
        let evidence = AuthorizationEvidence::Signed(signature);
        if !self.checker.verify(&evidence, required_signer, message) {
            warn!(signer = %required_signer, operation, "authorization failed");
            return Err(TokenError::AuthorizationFailed);
        }
        Ok(())
    }
}
