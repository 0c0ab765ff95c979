use super::hash::CryptoHash;
use crate::host::{combine_hash, Host};
use alloc::string::String;
use borsh::{BorshDeserialize, BorshSerialize};

pub type BlockHeight = u64;
pub type MerkleHash = CryptoHash;
pub type AccountId = String;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Eq, PartialEq)]
pub struct EpochId(pub CryptoHash);

/// The eight fixed fields every header hash is built over. Order matters:
/// it is exactly the order these fields are Borsh-serialized in.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Eq, PartialEq)]
pub struct InnerLite {
    /// Height of this block.
    pub height: BlockHeight,
    /// Epoch start hash of this block's epoch. Used for retrieving
    /// validator information.
    pub epoch_id: EpochId,
    pub next_epoch_id: EpochId,
    /// Root hash of the state at the previous block.
    pub prev_state_root: MerkleHash,
    /// Root of the outcomes of transactions and receipts.
    pub outcome_root: MerkleHash,
    /// Non-leap nanoseconds since January 1, 1970 0:00:00 UTC.
    pub timestamp: u64,
    /// Hash of the next epoch's block producer set.
    pub next_bp_hash: CryptoHash,
    /// Merkle root of block hashes up to and including this block.
    pub block_merkle_root: CryptoHash,
}

/// The lite form of a block header: the hashed `inner_lite`, plus the two
/// remaining components needed to fold it into the block hash.
#[derive(Clone, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize)]
pub struct BlockHeaderLite {
    pub inner_lite: InnerLite,
    pub inner_rest_hash: CryptoHash,
    pub prev_block_hash: CryptoHash,
}

impl BlockHeaderLite {
    pub fn hash(&self, host: &impl Host) -> CryptoHash {
        block_hash(host, &self.inner_lite, &self.inner_rest_hash, &self.prev_block_hash)
    }
}

/// Reconstructs a block hash from its three parts:
/// `sha256(sha256(borsh(inner_lite)) || inner_rest_hash) || prev_block_hash)`.
pub fn block_hash(
    host: &impl Host,
    inner_lite: &InnerLite,
    inner_rest_hash: &CryptoHash,
    prev_block_hash: &CryptoHash,
) -> CryptoHash {
    let inner_lite_hash = host.sha256(&borsh::to_vec(inner_lite).unwrap());
    combine_hash(
        host,
        &combine_hash(host, &inner_lite_hash, inner_rest_hash),
        prev_block_hash,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Sha256Ed25519Host;

    fn sample_inner_lite() -> InnerLite {
        InnerLite {
            height: 102_367_480,
            epoch_id: EpochId(CryptoHash::default()),
            next_epoch_id: EpochId(CryptoHash::default()),
            prev_state_root: CryptoHash::default(),
            outcome_root: CryptoHash::default(),
            timestamp: 1_700_000_000_000_000_000,
            next_bp_hash: CryptoHash::default(),
            block_merkle_root: CryptoHash::default(),
        }
    }

    #[test]
    fn hash_is_order_sensitive_in_the_outer_fold() {
        let host = Sha256Ed25519Host;
        let inner_lite = sample_inner_lite();
        let rest = host.sha256(b"rest");
        let prev = host.sha256(b"prev");

        let forward = block_hash(&host, &inner_lite, &rest, &prev);
        let swapped = block_hash(&host, &inner_lite, &prev, &rest);
        assert_ne!(forward, swapped);
    }
}
