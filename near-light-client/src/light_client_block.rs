//! The untrusted view of a candidate next head, as handed to [`crate::head::update_head`].

use crate::host::{combine_hash, Host};
use crate::near_types::block::{block_hash, BlockHeight, InnerLite};
use crate::near_types::hash::CryptoHash;
use crate::near_types::signature::Signature;
use crate::near_types::validator::ValidatorStake;
use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};

/// What a block producer actually signs over: either an endorsement of the
/// next block hash, or a skip of the given height.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum ApprovalInner {
    Endorsement(CryptoHash),
    Skip(BlockHeight),
}

/// A candidate head, as broadcast by an RPC node.
#[derive(Clone, Debug, BorshDeserialize, BorshSerialize)]
pub struct LightClientBlockView {
    pub prev_block_hash: CryptoHash,
    pub next_block_inner_hash: CryptoHash,
    pub inner_lite: InnerLite,
    pub inner_rest_hash: CryptoHash,
    pub next_bps: Option<Vec<ValidatorStake>>,
    pub approvals_after_next: Vec<Option<Signature>>,
}

impl LightClientBlockView {
    pub fn current_block_hash(&self, host: &impl Host) -> CryptoHash {
        block_hash(
            host,
            &self.inner_lite,
            &self.inner_rest_hash,
            &self.prev_block_hash,
        )
    }

    pub fn next_block_hash(&self, host: &impl Host) -> CryptoHash {
        combine_hash(
            host,
            &self.next_block_inner_hash,
            &self.current_block_hash(host),
        )
    }

    /// The exact byte sequence every present signature in
    /// `approvals_after_next` is expected to sign: the Borsh encoding of
    /// `ApprovalInner::Endorsement(next_block_hash)` followed by the
    /// little-endian target height (`height + 2`).
    pub fn approval_message(&self, host: &impl Host) -> Vec<u8> {
        let mut message = borsh::to_vec(&ApprovalInner::Endorsement(self.next_block_hash(host)))
            .expect("ApprovalInner serializes infallibly");
        message.extend_from_slice(&(self.inner_lite.height + 2).to_le_bytes());
        message
    }
}
