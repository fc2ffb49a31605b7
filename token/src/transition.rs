//! Pure transition computations.
//!
//! Each function maps old committed values and validated inputs to the new
//! values, with checked arithmetic throughout. Nothing here touches the
//! ledger; the contract variants wrap these in a conditional commit.

use crate::error::TokenError;
use oro_types::Amount;

/// Divisor of the deflationary transfer fee: `fee = amount / 100`.
pub const DEFLATION_FEE_DIVISOR: u64 = 100;

/// New supply after minting `amount`.
pub fn mint_supply(old_supply: Amount, amount: Amount) -> Result<Amount, TokenError> {
    old_supply.checked_add(amount).ok_or(TokenError::Overflow)
}

/// New supply after burning `amount` from a holder with `balance`.
///
/// Fails when the amount exceeds either the holder's balance or the
/// supply itself; both are insufficient-funds conditions.
pub fn burn_supply(
    old_supply: Amount,
    balance: Amount,
    amount: Amount,
) -> Result<Amount, TokenError> {
    if amount > balance {
        return Err(TokenError::InsufficientFunds {
            needed: amount.raw(),
            available: balance.raw(),
        });
    }
    old_supply
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientFunds {
            needed: amount.raw(),
            available: old_supply.raw(),
        })
}

/// The deflationary fee: strictly `floor(amount / 100)`. Amounts not
/// evenly divisible by 100 lose the remainder to the sender's benefit —
/// the fee is never rounded up.
pub fn deflation_fee(amount: Amount) -> Amount {
    // Divisor is a nonzero constant.
    amount
        .checked_div(DEFLATION_FEE_DIVISOR)
        .unwrap_or(Amount::ZERO)
}

/// Result of a deflationary transfer computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferOutcome {
    pub new_supply: Amount,
    pub fee: Amount,
    /// What the sender gives up: `amount + fee`.
    pub debited: Amount,
}

/// Deflationary transfer: the full `amount` reaches the receiver, the fee
/// is burned from the sender on top of it, and the supply shrinks by the
/// fee. Computed before any debit so supply and balances move together.
pub fn deflationary_transfer(
    old_supply: Amount,
    amount: Amount,
) -> Result<TransferOutcome, TokenError> {
    let fee = deflation_fee(amount);
    let new_supply =
        old_supply
            .checked_sub(fee)
            .ok_or(TokenError::InsufficientFunds {
                needed: fee.raw(),
                available: old_supply.raw(),
            })?;
    let debited = amount.checked_add(fee).ok_or(TokenError::Overflow)?;
    Ok(TransferOutcome {
        new_supply,
        fee,
        debited,
    })
}
