use super::hash::CryptoHash;
use crate::host::{combine_hash, Host};
use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};

/// Hash used by a struct implementing the Merkle tree.
pub type MerkleHash = CryptoHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MerklePathItem {
    pub hash: MerkleHash,
    pub direction: Direction,
}

pub type MerklePath = Vec<MerklePathItem>;

/// Folds `path` over `item_hash` to reconstruct the Merkle root the leaf
/// belongs to, re-deriving each ancestor in the order the path lists its
/// siblings.
pub fn root_from_path(host: &impl Host, path: &MerklePath, item_hash: MerkleHash) -> MerkleHash {
    let mut res = item_hash;
    for item in path {
        res = match item.direction {
            Direction::Left => combine_hash(host, &item.hash, &res),
            Direction::Right => combine_hash(host, &res, &item.hash),
        };
    }
    res
}

/// Verifies that `path` reconstructs `root` starting from `item_hash`.
pub fn verify_hash(host: &impl Host, root: MerkleHash, path: &MerklePath, item_hash: MerkleHash) -> bool {
    root_from_path(host, path, item_hash) == root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Sha256Ed25519Host;

    #[test]
    fn single_step_path_combines_in_declared_direction() {
        let host = Sha256Ed25519Host;
        let leaf = host.sha256(b"leaf");
        let sibling = host.sha256(b"sibling");

        let left_path = alloc::vec![MerklePathItem {
            hash: sibling,
            direction: Direction::Left,
        }];
        let expected_left = combine_hash(&host, &sibling, &leaf);
        assert_eq!(root_from_path(&host, &left_path, leaf), expected_left);

        let right_path = alloc::vec![MerklePathItem {
            hash: sibling,
            direction: Direction::Right,
        }];
        let expected_right = combine_hash(&host, &leaf, &sibling);
        assert_eq!(root_from_path(&host, &right_path, leaf), expected_right);
    }

    #[test]
    fn empty_path_returns_leaf_itself() {
        let host = Sha256Ed25519Host;
        let leaf = host.sha256(b"solo");
        assert!(verify_hash(&host, leaf, &alloc::vec![], leaf));
    }
}
