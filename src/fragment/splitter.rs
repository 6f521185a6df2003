//! Outbound helper that splits payloads into MTU-sized fragments.
//!
//! [`split`] cuts a payload into [`MAX_PAYLOAD_SIZE`] slices and tags each
//! with a [`Header`]. Slices share the payload allocation. [`Fragmenter`]
//! wraps the same operation with an internal [`GroupIdSequence`] for callers
//! that do not manage group identifiers themselves.

use bytes::Bytes;

use super::{Fragment, FragmentIndex, GroupId, GroupIdSequence, Header, SplitError};
use crate::budget::MAX_PAYLOAD_SIZE;

/// Split `payload` into fragments tagged with `id`.
///
/// Every fragment carries `fragmented = true` and `total` equal to the number
/// of fragments. An empty payload yields a single empty fragment so the
/// receiver still learns that an empty message was sent.
///
/// # Errors
///
/// Returns [`SplitError::TooManyFragments`] when the payload would need more
/// than `u16::MAX` fragments.
///
/// # Examples
///
/// ```
/// use datagram_fragment::{budget::MAX_PAYLOAD_SIZE, fragment::{GroupId, join, split}};
/// let payload = vec![7_u8; MAX_PAYLOAD_SIZE + 1];
/// let batch = split(GroupId::new(3), payload.clone()).expect("split");
/// assert_eq!(batch.len(), 2);
/// assert_eq!(join(batch.fragments()), payload);
/// ```
pub fn split(id: GroupId, payload: impl Into<Bytes>) -> Result<FragmentBatch, SplitError> {
    let payload = payload.into();
    let len = payload.len();
    let count = len.div_ceil(MAX_PAYLOAD_SIZE).max(1);
    let too_many = SplitError::TooManyFragments {
        len,
        max_fragments: u16::MAX,
    };
    let total = u16::try_from(count).map_err(|_| too_many)?;

    let mut fragments = Vec::with_capacity(count);
    for chunk in 0..count {
        let index = FragmentIndex::try_from(chunk).map_err(|_| too_many)?;
        let start = chunk * MAX_PAYLOAD_SIZE;
        let end = (start + MAX_PAYLOAD_SIZE).min(len);
        let header = Header::new(id, true, index, total);
        fragments.push(Fragment::new(header, payload.slice(start..end)));
    }

    tracing::trace!(group_id = %id, len, fragments = count, "split payload");
    Ok(FragmentBatch::new(id, fragments))
}

/// Split a borrowed payload, copying it once before slicing.
///
/// # Errors
///
/// Fails under the same conditions as [`split`].
pub fn split_slice(id: GroupId, payload: &[u8]) -> Result<FragmentBatch, SplitError> {
    split(id, Bytes::copy_from_slice(payload))
}

/// Collection of fragments produced for a single payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentBatch {
    id: GroupId,
    fragments: Vec<Fragment>,
}

impl FragmentBatch {
    fn new(id: GroupId, fragments: Vec<Fragment>) -> Self {
        debug_assert!(!fragments.is_empty(), "fragment batches must not be empty");
        Self { id, fragments }
    }

    /// Return the [`GroupId`] shared by all fragments.
    #[must_use]
    pub const fn id(&self) -> GroupId { self.id }

    /// Return the fragments in index order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] { self.fragments.as_slice() }

    /// Number of fragments in the batch.
    #[expect(
        clippy::len_without_is_empty,
        reason = "batches are guaranteed non-empty"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.fragments.len() }

    /// Whether the payload needed more than one fragment.
    ///
    /// Unrelated to [`Header::is_fragmented`], which is set on every fragment
    /// the splitter emits.
    #[must_use]
    pub fn is_multi_fragment(&self) -> bool { self.len() > 1 }

    /// Encode every fragment into its own frame.
    #[must_use]
    pub fn encode_all(&self) -> Vec<Bytes> { self.fragments.iter().map(Fragment::encode).collect() }

    /// Consume the batch, returning all fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> { self.fragments }
}

impl IntoIterator for FragmentBatch {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.into_iter() }
}

impl<'a> IntoIterator for &'a FragmentBatch {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.iter() }
}

/// Splitter that assigns group identifiers from an internal sequence.
///
/// `Fragmenter` only holds an atomic counter, so one instance can be shared
/// by reference between threads.
#[derive(Debug, Default)]
pub struct Fragmenter {
    ids: GroupIdSequence,
}

impl Fragmenter {
    /// Create a fragmenter whose first group identifier is zero.
    #[must_use]
    pub const fn new() -> Self { Self::with_starting_id(GroupId::new(0)) }

    /// Create a fragmenter starting from a specific [`GroupId`].
    #[must_use]
    pub const fn with_starting_id(start_at: GroupId) -> Self {
        Self {
            ids: GroupIdSequence::starting_at(start_at),
        }
    }

    /// Generate and return the next [`GroupId`].
    #[must_use]
    pub fn next_group_id(&self) -> GroupId { self.ids.next_id() }

    /// Split `payload` into fragments, generating a fresh [`GroupId`].
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::TooManyFragments`] if the payload needs more
    /// than `u16::MAX` fragments. The identifier is consumed either way.
    pub fn fragment_bytes(&self, payload: impl Into<Bytes>) -> Result<FragmentBatch, SplitError> {
        split(self.next_group_id(), payload)
    }
}
