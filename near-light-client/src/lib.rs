//! Verification core for a NEAR Protocol light client.
//!
//! This crate reconstructs block hashes, verifies the stake-weighted
//! quorum behind a candidate head, and checks the two Merkle inclusion
//! proofs (transaction/receipt outcomes, and ancestor headers) a light
//! client relies on. It does not talk to any NEAR RPC endpoint and does
//! not verify account/state-root (trie) proofs — both are the concern of
//! an embedding host.
//!
//! Every hash and signature check is routed through a [`host::Host`], so
//! the exact same verifier compiles either with the native [`std`]
//! feature's [`host::Sha256Ed25519Host`] or against a restricted host that
//! exposes its own precompiled primitives.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ancestor;
pub mod error;
pub mod head;
pub mod host;
pub mod light_client_block;
pub mod near_types;
pub mod outcome;

pub use ancestor::verify_block_inclusion;
pub use error::{Error, ErrorKind};
pub use head::{update_head, TrustedHead};
pub use host::Host;
pub use light_client_block::LightClientBlockView;
pub use outcome::{verify_transaction, ExecutionOutcome, OutcomeProof};

#[cfg(feature = "std")]
pub use host::Sha256Ed25519Host;
