//! Detached Ed25519 signing and verification.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use oro_types::{PrivateKey, PublicKey, Signature};

/// Sign a message with a private key, returning the detached signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify a detached signature against a message and public key.
///
/// Returns `false` on any failure, including public-key bytes that do not
/// decode to a valid curve point.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn sign_and_verify() {
        let kp = generate_keypair();
        let msg = b"mint 1000 to holder";
        let sig = sign_message(msg, &kp.private);
        assert!(verify_signature(msg, &sig, &kp.public));
    }

    #[test]
    fn wrong_message_fails() {
        let kp = generate_keypair();
        let sig = sign_message(b"mint 1000", &kp.private);
        assert!(!verify_signature(b"mint 1001", &sig, &kp.public));
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = generate_keypair();
        let kp2 = generate_keypair();
        let sig = sign_message(b"burn 500", &kp1.private);
        assert!(!verify_signature(b"burn 500", &sig, &kp2.public));
    }

    #[test]
    fn signature_is_deterministic() {
        let kp = keypair_from_seed(&[99u8; 32]);
        let sig1 = sign_message(b"transfer", &kp.private);
        let sig2 = sign_message(b"transfer", &kp.private);
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn empty_message_verifies() {
        let kp = generate_keypair();
        let sig = sign_message(b"", &kp.private);
        assert!(verify_signature(b"", &sig, &kp.public));
    }

    #[test]
    fn invalid_public_key_rejected() {
        let kp = generate_keypair();
        let sig = sign_message(b"anything", &kp.private);
        assert!(!verify_signature(b"anything", &sig, &PublicKey([0xFF; 32])));
    }
}
