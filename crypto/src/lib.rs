//! Ed25519 primitives for the ORO token engine: key generation and
//! detached sign/verify over operation messages.

pub mod keys;
pub mod sign;

pub use keys::{generate_keypair, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
