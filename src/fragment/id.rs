//! Group identifiers shared by every fragment of one payload.

use std::sync::atomic::{AtomicU32, Ordering};

use derive_more::{Display, From, Into};

/// Opaque identifier tying fragments to the payload they were split from.
///
/// The codec never checks identifiers for uniqueness; callers pick them
/// (randomly or from a [`GroupIdSequence`]) and group received fragments by
/// them.
///
/// # Examples
///
/// ```
/// use datagram_fragment::fragment::GroupId;
/// let id = GroupId::new(42);
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0}")]
pub struct GroupId(u32);

impl GroupId {
    /// Create a new identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the inner numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

/// Thread-safe source of sequential [`GroupId`] values.
///
/// The counter wraps after `u32::MAX`. Identifiers only need to be distinct
/// among groups that are in flight at the same time.
#[derive(Debug, Default)]
pub struct GroupIdSequence {
    next: AtomicU32,
}

impl GroupIdSequence {
    /// Create a sequence whose first identifier is zero.
    #[must_use]
    pub const fn new() -> Self { Self::starting_at(GroupId::new(0)) }

    /// Create a sequence whose first identifier is `start`.
    #[must_use]
    pub const fn starting_at(start: GroupId) -> Self {
        Self {
            next: AtomicU32::new(start.get()),
        }
    }

    /// Return the next identifier and advance the sequence.
    #[must_use]
    pub fn next_id(&self) -> GroupId { GroupId::new(self.next.fetch_add(1, Ordering::Relaxed)) }
}
