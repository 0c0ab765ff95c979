//! Host abstraction for the cryptographic primitives this crate needs.
//!
//! The verification core never calls `sha256` or a signature library
//! directly. Every hash and every signature check goes through a `Host`,
//! so the same verifier can run natively (the `std` feature's
//! [`Sha256Ed25519Host`]) or be driven by a runtime that exposes its own
//! precompiles for these operations (e.g. a smart-contract host).

use crate::near_types::hash::CryptoHash;
use crate::near_types::signature::{PublicKey, Signature};

/// Cryptographic primitives required by the verifier.
pub trait Host {
    /// SHA-256 of `data`.
    fn sha256(&self, data: &[u8]) -> CryptoHash;

    /// Verifies `signature` over `data` under `public_key`.
    fn verify(&self, data: &[u8], public_key: &PublicKey, signature: &Signature) -> bool;
}

/// Combines two digests the way every Merkle step and block-hash stage in
/// this crate does: `sha256(left || right)`.
pub fn combine_hash(host: &impl Host, left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
    let mut buf = alloc::vec::Vec::with_capacity(64);
    buf.extend_from_slice(left.as_bytes());
    buf.extend_from_slice(right.as_bytes());
    host.sha256(&buf)
}

#[cfg(feature = "std")]
mod native {
    use super::Host;
    use crate::near_types::hash::CryptoHash;
    use crate::near_types::signature::{PublicKey, Signature};
    use ed25519_dalek::Verifier;

    /// A [`Host`] backed by the `sha256` and `ed25519-dalek` crates.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct Sha256Ed25519Host;

    impl Host for Sha256Ed25519Host {
        fn sha256(&self, data: &[u8]) -> CryptoHash {
            let digest = sha256::digest(data);
            let bytes: [u8; 32] = hex::decode(digest)
                .expect("hex-encoded sha256 digest")
                .try_into()
                .expect("sha256 digest is 32 bytes");
            CryptoHash::from(bytes)
        }

        fn verify(&self, data: &[u8], public_key: &PublicKey, signature: &Signature) -> bool {
            match (public_key, signature) {
                (PublicKey::ED25519(public_key), Signature::ED25519(signature)) => {
                    match ed25519_dalek::PublicKey::from_bytes(&public_key.0) {
                        Err(_) => false,
                        Ok(public_key) => public_key.verify(data, signature).is_ok(),
                    }
                }
            }
        }
    }
}

#[cfg(feature = "std")]
pub use native::Sha256Ed25519Host;
