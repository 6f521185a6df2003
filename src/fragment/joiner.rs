//! Inbound helper that concatenates fragment payloads.
//!
//! Neither function sorts or buffers anything: callers group fragments by
//! [`GroupId`](crate::fragment::GroupId) and order them by index before
//! joining.

use bytes::{BufMut, Bytes, BytesMut};

use super::{Fragment, GroupValidator, JoinError};

/// Concatenate fragment payloads in the order given.
///
/// No consistency checks are made; fragments from different groups or in the
/// wrong order are joined as supplied. Use [`try_join`] to reject such input.
///
/// # Examples
///
/// ```
/// use datagram_fragment::fragment::{GroupId, join, split_slice};
/// let batch = split_slice(GroupId::new(1), b"hello").expect("split");
/// assert_eq!(join(batch.fragments()), &b"hello"[..]);
/// ```
#[must_use]
pub fn join(fragments: &[Fragment]) -> Bytes {
    let total: usize = fragments.iter().map(|fragment| usize::from(fragment.size())).sum();
    let mut buf = BytesMut::with_capacity(total);
    for fragment in fragments {
        buf.put_slice(fragment.payload());
    }
    buf.freeze()
}

/// Validate that `fragments` form one complete, ordered group and join them.
///
/// # Errors
///
/// Returns [`JoinError::Empty`] for an empty slice, and any error raised by
/// [`GroupValidator`] when the fragments mix groups, disagree on the total,
/// skip or repeat an index, or stop short of the announced total.
///
/// # Examples
///
/// ```
/// use datagram_fragment::fragment::{GroupId, JoinError, split_slice, try_join};
/// let batch = split_slice(GroupId::new(1), b"hello").expect("split");
/// assert_eq!(try_join(batch.fragments()).expect("join"), &b"hello"[..]);
/// assert_eq!(try_join(&[]), Err(JoinError::Empty));
/// ```
pub fn try_join(fragments: &[Fragment]) -> Result<Bytes, JoinError> {
    let first = fragments.first().ok_or(JoinError::Empty)?;
    let mut validator = GroupValidator::new(first.header());
    for fragment in fragments {
        if let Err(err) = validator.accept(fragment.header()) {
            log::debug!("refusing to join fragments: group_id={}, error={err}", validator.id());
            return Err(err);
        }
    }
    validator.finish()?;
    Ok(join(fragments))
}
