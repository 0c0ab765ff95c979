use alloc::string::{String, ToString};
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt::{self, Debug, Display};

/// A 32-byte opaque digest.
///
/// Equality is byte equality. The type never hashes anything itself — every
/// preimage in this crate is hashed through [`crate::host::Host`] so that the
/// same verifier logic can run against a native SHA-256 or a host-provided
/// precompile.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, BorshDeserialize, BorshSerialize, Hash)]
pub struct CryptoHash(pub [u8; 32]);

impl CryptoHash {
    //
    pub const fn new() -> Self {
        Self([0; 32])
    }
    //
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Default for CryptoHash {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for CryptoHash {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl From<[u8; 32]> for CryptoHash {
    fn from(bytes: [u8; 32]) -> Self {
        CryptoHash(bytes)
    }
}

impl TryFrom<&[u8]> for CryptoHash {
    type Error = String;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 32 {
            return Err("Wrong size.".to_string());
        }
        let inner: [u8; 32] = bytes.try_into().unwrap();
        Ok(CryptoHash(inner))
    }
}

impl Debug for CryptoHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt::Debug::fmt(&bs58::encode(self.0).into_string(), f)
    }
}

impl Display for CryptoHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt::Display::fmt(&bs58::encode(self.0).into_string(), f)
    }
}
