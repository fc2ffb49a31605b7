//! ORO token accounting core.
//!
//! Two contract variants over the same ledger boundary:
//!
//! - [`SimpleToken`] — mint/burn/transfer under ambient caller-identity
//!   trust, no per-operation proof object, no transfer fee.
//! - [`DeflationaryToken`] — every operation gated by a detached Ed25519
//!   signature, and every transfer burning `amount / 100` out of
//!   circulation.
//!
//! Each operation follows the same shape: authorization check, fresh read
//! of the committed supply, pure transition computation, then a single
//! compare-and-swap proposal to the ledger. Any failure along the way
//! leaves the ledger untouched.

pub mod auth;
pub mod deflationary;
pub mod error;
pub mod simple;
pub mod transition;

pub use auth::{
    operation_message, sign_operation, AmbientTrust, AuthorizationChecker, AuthorizationEvidence,
    EditPermission, SignatureCheck,
};
pub use deflationary::DeflationaryToken;
pub use error::TokenError;
pub use simple::SimpleToken;
