//! Fundamental types for the ORO token engine.
//!
//! This crate defines the types shared by every other crate in the
//! workspace: token amounts, the token symbol, and the Ed25519 key and
//! signature types that identify holders and authorize operations.

pub mod amount;
pub mod keys;
pub mod symbol;

pub use amount::Amount;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use symbol::TokenSymbol;
