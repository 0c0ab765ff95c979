//! Ancestor inclusion: proving a past header hash is part of the head's
//! block-merkle root.

use crate::error::{Error, ErrorKind};
use crate::host::Host;
use crate::near_types::block::BlockHeaderLite;
use crate::near_types::hash::CryptoHash;
use crate::near_types::merkle::{root_from_path, MerklePath};

/// Recomputes `lite_header`'s block hash, folds `block_proof` over it, and
/// checks the result against `head_block_merkle_root`.
pub fn verify_block_inclusion(
    host: &impl Host,
    lite_header: &BlockHeaderLite,
    block_proof: &MerklePath,
    head_block_merkle_root: &CryptoHash,
) -> Result<(), Error> {
    let block_hash = lite_header.hash(host);
    let root = root_from_path(host, block_proof, block_hash);

    if root != *head_block_merkle_root {
        return Err(Error::new(
            ErrorKind::BlockRootMismatch,
            "reconstructed block-merkle root does not match the head's",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Sha256Ed25519Host;
    use crate::near_types::block::{EpochId, InnerLite};
    use crate::near_types::merkle::{Direction, MerklePathItem};
    use alloc::vec::Vec;

    fn digest(b58: &str) -> CryptoHash {
        let mut bytes = [0u8; 32];
        let decoded = bs58::decode(b58).into_vec().unwrap();
        bytes.copy_from_slice(&decoded);
        CryptoHash::from(bytes)
    }

    fn item(direction: Direction, b58: &str) -> MerklePathItem {
        MerklePathItem {
            hash: digest(b58),
            direction,
        }
    }

    // Fixture transferred verbatim from the upstream test suite this
    // verifier's wire format was cross-checked against.
    #[test]
    fn verifies_the_published_ancestor_inclusion_fixture() {
        let host = Sha256Ed25519Host;

        let lite_header = BlockHeaderLite {
            inner_lite: InnerLite {
                height: 102_367_480,
                epoch_id: EpochId(digest("EeC8QHiPSdr6CSDhJiCQL4wMR8or33qvkvirzh9Moe6x")),
                next_epoch_id: EpochId(digest("4Wu9U6C3P9KAAymDYo5W5hv11yi7Xgw6UnyFS6u8V4T9")),
                prev_state_root: digest("EB8aWEHdXVomTwJZFgsTkRsVCk31fw2aqSxkL6R5eu6b"),
                outcome_root: digest("3yq51ESCg5st9qk7aksomjFc3hQoL2dobUdKg6TmshT9"),
                timestamp: 1_657_887_037_133_664_100,
                next_bp_hash: digest("74P742gjuiU6UTxpzgPR1L4c1iqMu6ZtPxFj656XAyCx"),
                block_merkle_root: digest("CRVMDaFCLz5GDKtgRzEqi2Rde52yzEDbLabtC2jK7nZm"),
            },
            inner_rest_hash: digest("FrHB6FJo8c8cPt3fVGz7QdfKfdwSXB3QWHkfpAeMDRzF"),
            prev_block_hash: digest("YUK3BcpAx3MvXtfgsqUTeRCq3tNnZW2N6xL3zcpJAAM"),
        };

        let block_proof: Vec<MerklePathItem> = alloc::vec![
            item(Direction::Right, "HqLoC4DL4mKZWoAuThT4tBKoS5qwPUmYx9UYZZMRbvms"),
            item(Direction::Right, "E4HJmteNwLvVzLAyo1C88xj4vb3TkkBFCHfEXgCkNXhN"),
            item(Direction::Right, "CwafrqqpdnQPUEUGCTCeZLZGbb2Xa1oUWKg9x7T71w43"),
            item(Direction::Left, "HJQCSyvJFdMF3Ua9tX9HTTBhf3ZXu8tXT98ZD8YRysVs"),
            item(Direction::Right, "DAMyXn1Gp1WDpQLDy9bxK1M3Euyjqb3kTSmwL42gnnYG"),
            item(Direction::Right, "8ad4uvqVVZya8D8rEfuJSt7UW6A9VhmZ3QGNm6P3zL1Z"),
            item(Direction::Left, "8jj7nPKuhkycSJXodX2Ajqi7XkPpPsStPjZpJGZtM2Uq"),
            item(Direction::Right, "87etPUFfUt2ybiMu2HbLBomMNVvdccZbpAQJoEhyEdXf"),
            item(Direction::Left, "2SRQ6q9ZtXf9EdFU95TCaCSsNDppAMtCMo1ZJnwfzP3i"),
            item(Direction::Left, "9aQtyk3aX1gqhBcv9YB1z2QsqmNuGKSWUj5SQUG8HvNg"),
            item(Direction::Left, "9qKmfMeLGWwxyFGGu1vyVdEGMKb3St185stmLq8rzgUh"),
            item(Direction::Right, "8PRLnyMWLFbK1toSGYQRZpidKY78h4d4rmWQ3ArJv7NH"),
            item(Direction::Right, "2jTjMrA4Cm6pRD8taKsu7K1R4xbLyqyWbYZfVMSYpeJW"),
            item(Direction::Right, "7w2UGWw5wveZTJmVW2MHoy3rMUKMhaP4GrGWz1AC1Bc8"),
            item(Direction::Left, "9cJ8taXvoAedWXZUFiJ7ZYijdhoTeUSYoK3oUFqJLUat"),
            item(Direction::Left, "EEs3nofauM8tN7zWoVjvXpK2EVqKMVrbGqGpyjL1DAKn"),
            item(Direction::Right, "5PUSvGkte8QtBvvyGz9mwceXtB88fjjTZcZQ8jQAP438"),
            item(Direction::Left, "3eask1LZa87NuXFYUCAJuWWvgLvj2rpt5ybM3VxC5vne"),
            item(Direction::Left, "4xiVKFyAaKx2JSNGZ3xAojPssGwoVwNSsroFFZHjKvak"),
            item(Direction::Left, "yxSr5HD8zXpYFVeWbE6bm88wYautgoFL3qysegeVDHH"),
            item(Direction::Left, "Bkcnkncp3gtWiciCK8QV2pk57MP6wWyBaRw2E7s7WbVb"),
            item(Direction::Left, "76U6DMh4J4VB5sfVVNRpSTeB4SEVt4HPqhtQi2izGZxt"),
        ];

        let head_block_merkle_root = digest("4xHziXrvtDKjdUjXmGfe5apzeMhMm1CpjJ8dBtRkiiPy");

        verify_block_inclusion(&host, &lite_header, &block_proof, &head_block_merkle_root)
            .unwrap();
    }

    #[test]
    fn tampered_root_is_rejected() {
        let host = Sha256Ed25519Host;
        let lite_header = BlockHeaderLite {
            inner_lite: InnerLite {
                height: 1,
                epoch_id: EpochId(CryptoHash::default()),
                next_epoch_id: EpochId(CryptoHash::default()),
                prev_state_root: CryptoHash::default(),
                outcome_root: CryptoHash::default(),
                timestamp: 0,
                next_bp_hash: CryptoHash::default(),
                block_merkle_root: CryptoHash::default(),
            },
            inner_rest_hash: CryptoHash::default(),
            prev_block_hash: CryptoHash::default(),
        };
        let err = verify_block_inclusion(&host, &lite_header, &Vec::new(), &CryptoHash::default())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BlockRootMismatch);
    }
}
