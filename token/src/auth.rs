//! Authorization evidence, checkers, and operation message encoding.
//!
//! Authorization is decoupled from any particular proof system: each
//! operation carries an [`AuthorizationEvidence`] value, and the contract
//! runs it through a pluggable [`AuthorizationChecker`]. Two checkers
//! exist, one per trust model.

use oro_crypto::{sign_message, verify_signature};
use oro_types::{Amount, PrivateKey, PublicKey, Signature};
use serde::{Deserialize, Serialize};

/// Evidence that the caller may perform the requested mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationEvidence {
    /// Trust in the network-level caller identity. No per-operation proof
    /// object exists; this is the explicitly weaker guarantee of the
    /// simple variant.
    Ambient,
    /// A detached signature over the exact operation message.
    Signed(Signature),
}

/// Validates authorization evidence against the required signer and the
/// exact operation message.
pub trait AuthorizationChecker {
    fn verify(
        &self,
        evidence: &AuthorizationEvidence,
        required_signer: &PublicKey,
        message: &[u8],
    ) -> bool;
}

/// Accepts ambient caller-identity trust and nothing else.
///
/// A signature handed to this checker is rejected: where only ambient
/// trust is configured, a proof object indicates caller confusion rather
/// than stronger authorization.
pub struct AmbientTrust;

impl AuthorizationChecker for AmbientTrust {
    fn verify(
        &self,
        evidence: &AuthorizationEvidence,
        _required_signer: &PublicKey,
        _message: &[u8],
    ) -> bool {
        matches!(evidence, AuthorizationEvidence::Ambient)
    }
}

/// Requires a detached Ed25519 signature over the exact message, checked
/// against the required signer. Exact field equality of the reconstructed
/// message; a mismatch is a hard failure.
pub struct SignatureCheck;

impl AuthorizationChecker for SignatureCheck {
    fn verify(
        &self,
        evidence: &AuthorizationEvidence,
        required_signer: &PublicKey,
        message: &[u8],
    ) -> bool {
        match evidence {
            AuthorizationEvidence::Signed(signature) => {
                verify_signature(message, signature, required_signer)
            }
            AuthorizationEvidence::Ambient => false,
        }
    }
}

/// Deterministic message an operation signature binds to: the subject
/// identity's bytes followed by the amount's little-endian bytes. For
/// mint/burn the subject is the target holder; for transfer it is the
/// receiver. No truncation, no reordering.
pub fn operation_message(subject: &PublicKey, amount: Amount) -> Vec<u8> {
    let mut message = Vec::with_capacity(40);
    message.extend_from_slice(subject.as_bytes());
    message.extend_from_slice(&amount.raw().to_le_bytes());
    message
}

/// Produce the signature an operation requires: `key` over the
/// (subject, amount) message. For mint/burn the subject is the target and
/// the key is the owner's; for transfer the subject is the receiver and
/// the key is the sender's.
pub fn sign_operation(subject: &PublicKey, amount: Amount, key: &PrivateKey) -> Signature {
    sign_message(&operation_message(subject, amount), key)
}

/// Who may edit contract-held state. Recorded once at contract creation;
/// both variants require signature-or-proof for every state edit, never a
/// bare unsigned request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditPermission {
    Signature,
    Proof,
    ProofOrSignature,
}
