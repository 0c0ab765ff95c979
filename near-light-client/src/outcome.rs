//! Transaction / receipt outcome inclusion, verified in two Merkle hops:
//! shard outcome root, then block outcome root.

use crate::error::{Error, ErrorKind};
use crate::host::Host;
use crate::near_types::hash::CryptoHash;
use crate::near_types::merkle::{root_from_path, MerklePath};
use crate::near_types::validator::{AccountId, Balance};
use alloc::string::String;
use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};

/// An execution outcome as returned by `EXPERIMENTAL_light_client_proof`.
///
/// `status` is the decoder's pre-serialized bytes of the tagged union
/// `Unknown | Failure | SuccessValue | SuccessReceiptId`. This crate treats
/// it as an opaque blob — it only ever needs to hash it, never interpret it.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ExecutionOutcome {
    pub logs: Vec<String>,
    pub receipt_ids: Vec<CryptoHash>,
    pub gas_burnt: u64,
    pub tokens_burnt: Balance,
    pub executor_id: AccountId,
    pub status: Vec<u8>,
}

/// A transaction or receipt id together with the outcome attributed to it,
/// plus the path proving that outcome's hash into a shard outcome root.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct OutcomeProof {
    pub proof: MerklePath,
    pub block_hash: CryptoHash,
    pub id: CryptoHash,
    pub outcome: ExecutionOutcome,
}

/// `sha256( serialize(receipt_ids) || serialize(gas_burnt) || serialize(tokens_burnt)
///   || serialize(executor_id) || status_bytes )`, followed by one more
/// `sha256` per log, in order. Mirrors the exact preimage NEAR nodes build
/// before folding it into `outcome_hash`.
fn merkelization_hashes(host: &impl Host, outcome: &ExecutionOutcome) -> Vec<CryptoHash> {
    let mut head = Vec::new();
    head.extend(borsh::to_vec(&outcome.receipt_ids).unwrap());
    head.extend(borsh::to_vec(&outcome.gas_burnt).unwrap());
    head.extend(borsh::to_vec(&outcome.tokens_burnt).unwrap());
    head.extend(borsh::to_vec(&outcome.executor_id).unwrap());
    head.extend_from_slice(&outcome.status);

    let mut hashes = Vec::with_capacity(1 + outcome.logs.len());
    hashes.push(host.sha256(&head));
    for log in &outcome.logs {
        hashes.push(host.sha256(log.as_bytes()));
    }
    hashes
}

/// `sha256( u32_le(len(merkelization_hashes) + 1) || tx_or_receipt_id || concat(merkelization_hashes) )`.
fn outcome_hash(host: &impl Host, id: &CryptoHash, outcome: &ExecutionOutcome) -> CryptoHash {
    let hashes = merkelization_hashes(host, outcome);

    let mut preimage = Vec::with_capacity(4 + 32 + hashes.len() * 32);
    preimage.extend_from_slice(&((hashes.len() as u32) + 1).to_le_bytes());
    preimage.extend_from_slice(id.as_bytes());
    for hash in &hashes {
        preimage.extend_from_slice(hash.as_bytes());
    }
    host.sha256(&preimage)
}

/// Reconstructs the block outcome root for `outcome_proof` and checks it
/// against `expected_block_outcome_root`.
///
/// `outcome_root_proof` lifts the shard outcome root (itself re-hashed once,
/// to separate the two Merkle trees and block second-preimage attacks
/// across shard boundaries) into the block-level outcome root.
pub fn verify_transaction(
    host: &impl Host,
    outcome_proof: &OutcomeProof,
    outcome_root_proof: &MerklePath,
    expected_block_outcome_root: &CryptoHash,
) -> Result<(), Error> {
    let leaf = outcome_hash(host, &outcome_proof.id, &outcome_proof.outcome);
    let shard_outcome_root = root_from_path(host, &outcome_proof.proof, leaf);
    let shard_outcome_root_hash = host.sha256(shard_outcome_root.as_bytes());
    let block_outcome_root = root_from_path(host, outcome_root_proof, shard_outcome_root_hash);

    if block_outcome_root != *expected_block_outcome_root {
        return Err(Error::new(
            ErrorKind::OutcomeRootMismatch,
            "reconstructed block outcome root does not match expected root",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Sha256Ed25519Host;
    use crate::near_types::merkle::{Direction, MerklePathItem};
    use bs58;

    fn digest(b58: &str) -> CryptoHash {
        let mut bytes = [0u8; 32];
        let decoded = bs58::decode(b58).into_vec().unwrap();
        bytes.copy_from_slice(&decoded);
        CryptoHash::from(bytes)
    }

    fn right(b58: &str) -> MerklePathItem {
        MerklePathItem {
            hash: digest(b58),
            direction: Direction::Right,
        }
    }

    fn left(b58: &str) -> MerklePathItem {
        MerklePathItem {
            hash: digest(b58),
            direction: Direction::Left,
        }
    }

    // Fixture transferred verbatim from the upstream test suite this
    // verifier's wire format was cross-checked against.
    #[test]
    fn verifies_the_published_transaction_inclusion_fixture() {
        let host = Sha256Ed25519Host;

        let receipt_id = digest("8hxkU4avDWFDCsZckig7oN2ypnYvLyb1qmZ3SA1t8iZK");
        let mut status = alloc::vec![3u8];
        status.extend_from_slice(receipt_id.as_bytes());

        let outcome = ExecutionOutcome {
            logs: Vec::new(),
            receipt_ids: alloc::vec![receipt_id],
            gas_burnt: 2_428_395_018_008,
            tokens_burnt: 242_839_501_800_800_000_000_000_000,
            executor_id: "relay.aurora".into(),
            status,
        };

        let outcome_proof = OutcomeProof {
            proof: alloc::vec![
                right("B1Kx1mFhCpjkhon9iYJ5BMdmBT8drgesumGZoohWhAkL"),
                right("3tTqGEkN2QHr1HQdctpdCoJ6eJeL6sSBw4m5aabgGWBT"),
                right("FR6wWrpjkV31NHr6BvRjJmxmL4Y5qqmrLRHT42sidMv5"),
            ],
            block_hash: CryptoHash::default(),
            id: digest("8HoqDvJGYrSjaejXpv2PsK8c5NUvqhU3EcUFkgq18jx9"),
            outcome,
        };

        let outcome_root_proof = alloc::vec![
            left("3hbd1r5BK33WsN6Qit7qJCjFeVZfDFBZL3TnJt2S2T4T"),
            left("4A9zZ1umpi36rXiuaKYJZgAjhUH9WoTrnSBXtA3wMdV2"),
        ];

        let expected = digest("AZYywqmo6vXvhPdVyuotmoEDgNb2tQzh2A1kV5f4Mxmq");

        verify_transaction(&host, &outcome_proof, &outcome_root_proof, &expected).unwrap();
    }

    #[test]
    fn mismatched_root_is_rejected() {
        let host = Sha256Ed25519Host;
        let outcome = ExecutionOutcome {
            logs: Vec::new(),
            receipt_ids: Vec::new(),
            gas_burnt: 1,
            tokens_burnt: 1,
            executor_id: "a.near".into(),
            status: alloc::vec![0u8],
        };
        let outcome_proof = OutcomeProof {
            proof: Vec::new(),
            block_hash: CryptoHash::default(),
            id: CryptoHash::default(),
            outcome,
        };
        let err = verify_transaction(&host, &outcome_proof, &Vec::new(), &CryptoHash::default())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::OutcomeRootMismatch);
    }
}
