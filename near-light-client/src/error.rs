use alloc::string::String;
use core::fmt::{self, Display};

/// The kinds of failure a verifier operation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input bytes do not match the codec or an expected fixed width.
    Decode,
    /// `update_head` was offered a view at or below the current head's height.
    StaleHead,
    /// The view's `epoch_id` is neither the head's current nor next epoch.
    UnknownEpoch,
    /// The view transitions epoch but carries no `next_bps`.
    MissingNextProducers,
    /// `sha256(serialize(next_bps))` does not match `inner_lite.next_bp_hash`.
    BadNextBpHash,
    /// An approval signature did not verify under its producer's public key.
    BadSignature,
    /// Approved stake did not strictly exceed two-thirds of total stake.
    QuorumNotReached,
    /// Reconstructed outcome root did not match the expected value.
    OutcomeRootMismatch,
    /// Reconstructed block-merkle root did not match the head's.
    BlockRootMismatch,
    /// A caller-supplied structure violates a structural invariant.
    BadInput,
}

/// The single error type returned by every fallible operation in this
/// crate. Kept deliberately simple: `no_std` rules out `std::error::Error`,
/// and `thiserror` needs `std`, so this mirrors the teacher's own plain
/// `#[derive(Debug, Clone)]` error enums rather than reaching for a crate
/// this context can't use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
