//! Converts NEAR RPC view types into the wire types the verification core
//! operates on. This is the one place that knows about `near-primitives`
//! and `near-crypto`; nothing downstream of it does.

use near_light_client::near_types::block::{BlockHeaderLite, EpochId, InnerLite};
use near_light_client::near_types::hash::CryptoHash;
use near_light_client::near_types::merkle::{Direction, MerklePathItem};
use near_light_client::near_types::signature::{ED25519PublicKey, PublicKey, Signature};
use near_light_client::near_types::validator::{ValidatorStake, ValidatorStakeV1};
use near_light_client::outcome::{ExecutionOutcome, OutcomeProof};
use near_light_client::LightClientBlockView;

fn convert_hash(hash: near_primitives::hash::CryptoHash) -> CryptoHash {
    CryptoHash::from(hash.0)
}

fn convert_public_key(key: &near_crypto::PublicKey) -> PublicKey {
    match key {
        near_crypto::PublicKey::ED25519(data) => PublicKey::ED25519(ED25519PublicKey(data.0)),
        _ => panic!("unsupported public key curve"),
    }
}

fn convert_signature(signature: &near_crypto::Signature) -> Signature {
    match signature {
        near_crypto::Signature::ED25519(data) => Signature::ED25519(*data),
        _ => panic!("unsupported signature curve"),
    }
}

pub fn convert_inner_lite(view: &near_primitives::views::BlockHeaderInnerLiteView) -> InnerLite {
    InnerLite {
        height: view.height,
        epoch_id: EpochId(convert_hash(view.epoch_id)),
        next_epoch_id: EpochId(convert_hash(view.next_epoch_id)),
        prev_state_root: convert_hash(view.prev_state_root),
        outcome_root: convert_hash(view.outcome_root),
        timestamp: view.timestamp,
        next_bp_hash: convert_hash(view.next_bp_hash),
        block_merkle_root: convert_hash(view.block_merkle_root),
    }
}

pub fn convert_block_header_lite(
    view: &near_primitives::views::LightClientBlockLiteView,
) -> BlockHeaderLite {
    BlockHeaderLite {
        inner_lite: convert_inner_lite(&view.inner_lite),
        inner_rest_hash: convert_hash(view.inner_rest_hash),
        prev_block_hash: convert_hash(view.prev_block_hash),
    }
}

pub fn convert_light_client_block_view(
    view: &near_primitives::views::LightClientBlockView,
) -> LightClientBlockView {
    LightClientBlockView {
        prev_block_hash: convert_hash(view.prev_block_hash),
        next_block_inner_hash: convert_hash(view.next_block_inner_hash),
        inner_lite: convert_inner_lite(&view.inner_lite),
        inner_rest_hash: convert_hash(view.inner_rest_hash),
        next_bps: view.next_bps.as_ref().map(|bps| {
            bps.iter()
                .map(|producer| {
                    let near_primitives::views::validator_stake_view::ValidatorStakeView::V1(v) =
                        producer;
                    ValidatorStake::V1(ValidatorStakeV1 {
                        account_id: v.account_id.to_string(),
                        public_key: convert_public_key(&v.public_key),
                        stake: v.stake,
                    })
                })
                .collect()
        }),
        approvals_after_next: view
            .approvals_after_next
            .iter()
            .map(|maybe_sig| maybe_sig.as_ref().map(|sig| convert_signature(sig)))
            .collect(),
    }
}

pub fn convert_merkle_path(
    path: &[near_primitives::merkle::MerklePathItem],
) -> Vec<MerklePathItem> {
    path.iter()
        .map(|item| MerklePathItem {
            hash: convert_hash(item.hash),
            direction: match item.direction {
                near_primitives::merkle::Direction::Left => Direction::Left,
                near_primitives::merkle::Direction::Right => Direction::Right,
            },
        })
        .collect()
}

pub fn convert_outcome_proof(
    proof: &near_primitives::views::ExecutionOutcomeWithIdView,
) -> OutcomeProof {
    let outcome = &proof.outcome;
    OutcomeProof {
        proof: convert_merkle_path(&proof.proof),
        block_hash: convert_hash(proof.block_hash),
        id: convert_hash(proof.id),
        outcome: ExecutionOutcome {
            logs: outcome.logs.clone(),
            receipt_ids: outcome.receipt_ids.iter().map(|id| convert_hash(*id)).collect(),
            gas_burnt: outcome.gas_burnt,
            tokens_burnt: outcome.tokens_burnt,
            executor_id: outcome.executor_id.to_string(),
            status: borsh::to_vec(&outcome.status).expect("status view serializes infallibly"),
        },
    }
}
