//! Error types emitted by the fragment codec.
//!
//! Decoding, checksum verification, splitting and validated joining each get
//! their own enum so callers only match on the failures an operation can
//! actually produce.

use thiserror::Error;

use super::{FragmentIndex, GroupId};

/// Errors produced while decoding a fragment frame.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer cannot hold even an empty-payload frame.
    #[error("fragment buffer too short: {len} < {min} bytes")]
    ShortBuffer {
        /// Bytes available.
        len: usize,
        /// Smallest valid frame size.
        min: usize,
    },
    /// The declared payload length runs past the end of the buffer.
    #[error("fragment length mismatch: frame needs {required} bytes, buffer has {available}")]
    LengthMismatch {
        /// Payload length announced by the frame.
        declared: u16,
        /// Frame size implied by `declared`.
        required: usize,
        /// Bytes available.
        available: usize,
    },
}

/// Errors produced by [`Fragment::verify_checksum`](crate::fragment::Fragment::verify_checksum).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The carried checksum does not match the payload.
    #[error("fragment checksum mismatch: expected {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum carried by the fragment.
        expected: u32,
        /// Checksum computed over the payload.
        actual: u32,
    },
}

/// Errors produced while splitting a payload.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// The payload needs more fragments than the 16-bit total can count.
    #[error("payload of {len} bytes needs more than {max_fragments} fragments")]
    TooManyFragments {
        /// Payload length in bytes.
        len: usize,
        /// Largest fragment count a header can express.
        max_fragments: u16,
    },
}

/// Errors produced by [`try_join`](crate::fragment::try_join).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    /// No fragments were supplied.
    #[error("no fragments to join")]
    Empty,
    /// A fragment belongs to a different group.
    #[error("fragment group mismatch: expected {expected}, found {found}")]
    GroupMismatch { expected: GroupId, found: GroupId },
    /// A fragment is not at the position it claims.
    #[error("fragment index mismatch: expected {expected}, found {found}")]
    IndexMismatch {
        expected: FragmentIndex,
        found: FragmentIndex,
    },
    /// The group announces a total of zero fragments.
    #[error("fragment group {id} announces no fragments")]
    EmptyGroup { id: GroupId },
    /// Fragments disagree about the size of the group.
    #[error("fragment total mismatch: expected {expected}, found {found}")]
    TotalMismatch { expected: u16, found: u16 },
    /// More fragments were supplied than the group announces.
    #[error("fragment group overrun: more than {total} fragments supplied")]
    Overrun { total: u16 },
    /// Fewer fragments were supplied than the group announces.
    #[error("fragment group incomplete: received {received} of {total}")]
    Incomplete { received: usize, total: u16 },
}
