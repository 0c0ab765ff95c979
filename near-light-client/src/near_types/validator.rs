use super::signature::PublicKey;
use alloc::string::String;
use borsh::{
    maybestd::io::{Error, Write},
    BorshDeserialize, BorshSerialize,
};

pub type AccountId = String;
pub type Balance = u128;

/// A validator stake record, in the `V1` wire shape NEAR has used since
/// genesis.
///
/// The Borsh encoding of this struct does not match a plain derive: between
/// `account_id` and `public_key` there is a single `0x00` byte left over from
/// an enum discriminant in an earlier protocol version. Any light client
/// that wants to reproduce `next_bp_hash` has to byte-compatible with that
/// history, so the (de)serializers below are hand-written instead of
/// derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorStakeV1 {
    pub account_id: AccountId,
    pub public_key: PublicKey,
    pub stake: Balance,
}

impl BorshSerialize for ValidatorStakeV1 {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        BorshSerialize::serialize(&self.account_id, writer)?;
        BorshSerialize::serialize(&0u8, writer)?;
        BorshSerialize::serialize(&self.public_key, writer)?;
        BorshSerialize::serialize(&self.stake, writer)?;
        Ok(())
    }
}

impl BorshDeserialize for ValidatorStakeV1 {
    fn deserialize(buf: &mut &[u8]) -> Result<Self, Error> {
        let account_id = BorshDeserialize::deserialize(buf)?;
        let _legacy_tag: u8 = BorshDeserialize::deserialize(buf)?;
        let public_key = BorshDeserialize::deserialize(buf)?;
        let stake = BorshDeserialize::deserialize(buf)?;
        Ok(Self {
            account_id,
            public_key,
            stake,
        })
    }
}

/// Only the `V1` shape is observed on mainnet/testnet today, but the
/// producer set is still wire-tagged as a sum type.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum ValidatorStake {
    V1(ValidatorStakeV1),
}

impl ValidatorStake {
    pub fn account_id(&self) -> &AccountId {
        match self {
            Self::V1(v1) => &v1.account_id,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        match self {
            Self::V1(v1) => &v1.public_key,
        }
    }

    pub fn stake(&self) -> Balance {
        match self {
            Self::V1(v1) => v1.stake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_stake_v1_round_trips_through_borsh() {
        let stake = ValidatorStakeV1 {
            account_id: "relay.aurora".into(),
            public_key: PublicKey::ED25519(super::super::signature::ED25519PublicKey([7u8; 32])),
            stake: 123_456_789_000_000_000_000_000_000,
        };
        let bytes = borsh::to_vec(&stake).unwrap();
        // account_id length prefix (4) + bytes + legacy tag (1) + key tag (1)
        // + key bytes (32) + stake (16).
        assert_eq!(bytes.len(), 4 + stake.account_id.len() + 1 + 1 + 32 + 16);
        assert_eq!(bytes[4 + stake.account_id.len()], 0u8);
        let decoded = ValidatorStakeV1::try_from_slice(&bytes).unwrap();
        assert_eq!(decoded, stake);
    }
}
