//! Consistency checks for an ordered run of fragments from one group.
//!
//! `GroupValidator` does not buffer payloads or reorder anything. It only
//! confirms that a sequence the caller already grouped and sorted is what the
//! splitter would have produced, so [`try_join`](crate::fragment::try_join)
//! can refuse to concatenate a mixed or gappy sequence.

use super::{FragmentIndex, GroupId, Header, JoinError};

/// Result of feeding a header into a [`GroupValidator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupStatus {
    /// The group still expects more fragments.
    Incomplete,
    /// The header was the last fragment of the group.
    Complete,
}

/// Track the expected position of the next fragment of a single group.
///
/// # Examples
///
/// ```
/// use datagram_fragment::fragment::{FragmentIndex, GroupId, GroupStatus, GroupValidator, Header};
/// let first = Header::new(GroupId::new(9), true, FragmentIndex::zero(), 2);
/// let second = Header::new(GroupId::new(9), true, FragmentIndex::new(1), 2);
///
/// let mut validator = GroupValidator::new(&first);
/// assert_eq!(validator.accept(&first), Ok(GroupStatus::Incomplete));
/// assert_eq!(validator.accept(&second), Ok(GroupStatus::Complete));
/// assert!(validator.finish().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct GroupValidator {
    id: GroupId,
    total: u16,
    next_index: FragmentIndex,
    received: usize,
    complete: bool,
}

impl GroupValidator {
    /// Start validating the group announced by `first`.
    ///
    /// The identifier and total are taken from `first`; `first` itself still
    /// has to be passed to [`accept`](Self::accept).
    #[must_use]
    pub const fn new(first: &Header) -> Self {
        Self {
            id: first.id(),
            total: first.total(),
            next_index: FragmentIndex::zero(),
            received: 0,
            complete: false,
        }
    }

    /// Return the group identifier being validated.
    #[must_use]
    pub const fn id(&self) -> GroupId { self.id }

    /// Return whether the final fragment has been accepted.
    #[must_use]
    pub const fn is_complete(&self) -> bool { self.complete }

    /// Accept the next header in sequence.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::GroupMismatch`] for a header from another group,
    /// [`JoinError::EmptyGroup`] when the group announces zero fragments,
    /// [`JoinError::TotalMismatch`] when the header announces a different
    /// group size, [`JoinError::Overrun`] for any header after the last one,
    /// and [`JoinError::IndexMismatch`] when the header is not at the expected
    /// position.
    pub fn accept(&mut self, header: &Header) -> Result<GroupStatus, JoinError> {
        if header.id() != self.id {
            return Err(JoinError::GroupMismatch {
                expected: self.id,
                found: header.id(),
            });
        }

        if self.total == 0 {
            return Err(JoinError::EmptyGroup { id: self.id });
        }

        if header.total() != self.total {
            return Err(JoinError::TotalMismatch {
                expected: self.total,
                found: header.total(),
            });
        }

        if self.complete {
            return Err(JoinError::Overrun { total: self.total });
        }

        if header.index() != self.next_index {
            return Err(JoinError::IndexMismatch {
                expected: self.next_index,
                found: header.index(),
            });
        }

        self.received += 1;
        match self.next_index.checked_increment() {
            Some(next) if next.get() < self.total => {
                self.next_index = next;
                Ok(GroupStatus::Incomplete)
            }
            _ => {
                self.complete = true;
                Ok(GroupStatus::Complete)
            }
        }
    }

    /// Confirm every announced fragment was accepted.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::Incomplete`] when fragments are missing from the
    /// end of the group.
    pub fn finish(&self) -> Result<(), JoinError> {
        if self.complete {
            return Ok(());
        }
        Err(JoinError::Incomplete {
            received: self.received,
            total: self.total,
        })
    }
}
