//! The trusted head and the quorum-verified update that advances it.

use crate::error::{Error, ErrorKind};
use crate::host::Host;
use crate::light_client_block::LightClientBlockView;
use crate::near_types::block::BlockHeaderLite;
use crate::near_types::hash::CryptoHash;
use crate::near_types::validator::{Balance, ValidatorStake};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// State the verifier exclusively owns: the last accepted head, plus the
/// ordered producer set for every epoch it has confirmed.
///
/// Mutated only by a successful [`update_head`] — and there, only after
/// every check below has passed. A failed call leaves this struct
/// bit-identical to its pre-call value.
#[derive(Clone, Debug)]
pub struct TrustedHead {
    pub head: LightClientBlockView,
    pub producers: BTreeMap<CryptoHash, Vec<ValidatorStake>>,
}

impl TrustedHead {
    /// Installs a checkpoint the caller trusts out-of-band, together with
    /// the producer sets for its epoch and (if already known) the next.
    pub fn from_checkpoint(
        head: LightClientBlockView,
        current_epoch_producers: Vec<ValidatorStake>,
        next_epoch_producers: Option<Vec<ValidatorStake>>,
    ) -> Self {
        let mut producers = BTreeMap::new();
        producers.insert(head.inner_lite.epoch_id.0, current_epoch_producers);
        if let Some(next) = next_epoch_producers {
            producers.insert(head.inner_lite.next_epoch_id.0, next);
        }
        Self { head, producers }
    }

    pub fn header_lite(&self) -> BlockHeaderLite {
        BlockHeaderLite {
            inner_lite: self.head.inner_lite.clone(),
            inner_rest_hash: self.head.inner_rest_hash,
            prev_block_hash: self.head.prev_block_hash,
        }
    }
}

/// `approved_stake * 3 > total_stake * 2`, computed without risking u128
/// overflow on the left-hand multiplication.
fn quorum_reached(approved_stake: Balance, total_stake: Balance) -> bool {
    let third = total_stake / 3;
    let remainder_rounds_up = total_stake % 3 > 0;
    let two_thirds_floor = total_stake - third - if remainder_rounds_up { 1 } else { 0 };
    approved_stake > two_thirds_floor
}

/// Validates `view` against `state` and, only if every check passes,
/// commits it as the new head. Steps follow the protocol exactly: any
/// failure aborts before step 7, so `state` is left untouched.
pub fn update_head(
    host: &impl Host,
    view: LightClientBlockView,
    state: &mut TrustedHead,
) -> Result<(), Error> {
    // 1. Height strictly increases.
    if view.inner_lite.height <= state.head.inner_lite.height {
        return Err(Error::new(
            ErrorKind::StaleHead,
            "view height does not exceed current head height",
        ));
    }

    // 2. Epoch membership.
    let is_same_epoch = view.inner_lite.epoch_id == state.head.inner_lite.epoch_id;
    let is_next_epoch = view.inner_lite.epoch_id == state.head.inner_lite.next_epoch_id;
    if !is_same_epoch && !is_next_epoch {
        return Err(Error::new(
            ErrorKind::UnknownEpoch,
            "view epoch_id is neither the head's current nor next epoch",
        ));
    }

    // 3. Producer handoff present.
    if is_next_epoch && view.next_bps.is_none() {
        return Err(Error::new(
            ErrorKind::MissingNextProducers,
            "epoch transitioned but view carries no next_bps",
        ));
    }

    // 4. Approval message.
    let approval_message = view.approval_message(host);

    // 5. Stake tally.
    let producers = state
        .producers
        .get(&view.inner_lite.epoch_id.0)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::UnknownEpoch,
                "no cached producer set for view epoch_id",
            )
        })?;

    let mut total_stake: Balance = 0;
    let mut approved_stake: Balance = 0;
    for (maybe_approval, producer) in view.approvals_after_next.iter().zip(producers.iter()) {
        total_stake += producer.stake();

        let Some(signature) = maybe_approval else {
            continue;
        };
        if !host.verify(&approval_message, producer.public_key(), signature) {
            return Err(Error::new(
                ErrorKind::BadSignature,
                "approval signature failed verification",
            ));
        }
        approved_stake += producer.stake();
    }

    // 6. Quorum.
    if !quorum_reached(approved_stake, total_stake) {
        return Err(Error::new(
            ErrorKind::QuorumNotReached,
            "approved stake does not strictly exceed two-thirds of total stake",
        ));
    }

    // 7. Producer handoff hash. Only here and in step 8 does state mutate,
    // and only together.
    if let Some(next_bps) = &view.next_bps {
        let next_bp_hash = host.sha256(&borsh::to_vec(next_bps).unwrap());
        if next_bp_hash != view.inner_lite.next_bp_hash {
            return Err(Error::new(
                ErrorKind::BadNextBpHash,
                "sha256(serialize(next_bps)) does not match inner_lite.next_bp_hash",
            ));
        }
        state
            .producers
            .insert(view.inner_lite.next_epoch_id.0, next_bps.clone());
    }

    // 8. Commit.
    state.head = view;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Sha256Ed25519Host;
    use crate::near_types::block::{EpochId, InnerLite};

    fn inner_lite(height: u64, epoch_id: CryptoHash, next_epoch_id: CryptoHash) -> InnerLite {
        InnerLite {
            height,
            epoch_id: EpochId(epoch_id),
            next_epoch_id: EpochId(next_epoch_id),
            prev_state_root: CryptoHash::default(),
            outcome_root: CryptoHash::default(),
            timestamp: 0,
            next_bp_hash: CryptoHash::default(),
            block_merkle_root: CryptoHash::default(),
        }
    }

    fn view(height: u64, epoch_id: CryptoHash, next_epoch_id: CryptoHash) -> LightClientBlockView {
        LightClientBlockView {
            prev_block_hash: CryptoHash::default(),
            next_block_inner_hash: CryptoHash::default(),
            inner_lite: inner_lite(height, epoch_id, next_epoch_id),
            inner_rest_hash: CryptoHash::default(),
            next_bps: None,
            approvals_after_next: Vec::new(),
        }
    }

    #[test]
    fn stale_height_is_rejected_without_mutating_state() {
        let host = Sha256Ed25519Host;
        let epoch = CryptoHash::default();
        let next_epoch = host.sha256(b"next-epoch");
        let head_view = view(10, epoch, next_epoch);
        let mut state = TrustedHead::from_checkpoint(head_view.clone(), Vec::new(), None);

        let stale = view(10, epoch, next_epoch);
        let err = update_head(&host, stale, &mut state).unwrap_err();
        assert_eq!(err.kind, ErrorKind::StaleHead);
        assert_eq!(state.head.inner_lite.height, head_view.inner_lite.height);
    }

    #[test]
    fn quorum_reached_requires_strict_two_thirds() {
        assert!(!quorum_reached(200, 300));
        assert!(quorum_reached(201, 300));
        assert!(quorum_reached(u128::MAX, u128::MAX));
    }

    #[test]
    fn unknown_epoch_is_rejected() {
        let host = Sha256Ed25519Host;
        let epoch = CryptoHash::default();
        let next_epoch = host.sha256(b"next-epoch");
        let head_view = view(10, epoch, next_epoch);
        let mut state = TrustedHead::from_checkpoint(head_view, Vec::new(), None);

        let wrong_epoch = view(11, host.sha256(b"unrelated-epoch"), host.sha256(b"whatever"));
        let err = update_head(&host, wrong_epoch, &mut state).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownEpoch);
    }
}
