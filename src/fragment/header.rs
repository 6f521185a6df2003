use super::{FragmentIndex, GroupId};
use crate::{
    budget::HEADER_SIZE,
    byte_order::{from_wire_u16, from_wire_u32, write_wire_u16, write_wire_u32},
};

const FRAGMENTED_FLAG: u8 = 0b0000_0001;

/// Header locating a fragment within its group.
///
/// Encodes to exactly [`HEADER_SIZE`] bytes:
///
/// | offset | size | field                                   |
/// |--------|------|-----------------------------------------|
/// | 0      | 4    | group id                                |
/// | 4      | 1    | flags (bit 0 = fragmented, rest zero)   |
/// | 5      | 2    | fragment index                          |
/// | 7      | 2    | fragment total                          |
///
/// All integers are little-endian.
///
/// # Examples
///
/// ```
/// use datagram_fragment::fragment::{FragmentIndex, GroupId, Header};
/// let header = Header::new(GroupId::new(7), true, FragmentIndex::zero(), 2);
/// let bytes = header.encode();
/// assert_eq!(bytes, [7, 0, 0, 0, 1, 0, 0, 2, 0]);
/// assert_eq!(Header::decode(&bytes), header);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    id: GroupId,
    fragmented: bool,
    index: FragmentIndex,
    total: u16,
}

impl Header {
    /// Create a new fragment header.
    #[must_use]
    pub const fn new(id: GroupId, fragmented: bool, index: FragmentIndex, total: u16) -> Self {
        Self {
            id,
            fragmented,
            index,
            total,
        }
    }

    /// Return the group identifier.
    #[must_use]
    pub const fn id(&self) -> GroupId { self.id }

    /// Report whether the splitter produced this fragment.
    #[must_use]
    pub const fn is_fragmented(&self) -> bool { self.fragmented }

    /// Return the fragment position within its group.
    #[must_use]
    pub const fn index(&self) -> FragmentIndex { self.index }

    /// Return the number of fragments in the group.
    #[must_use]
    pub const fn total(&self) -> u16 { self.total }

    /// Return the packed flags byte.
    #[must_use]
    pub const fn flags(&self) -> u8 {
        if self.fragmented { FRAGMENTED_FLAG } else { 0 }
    }

    /// Serialise the header into its fixed wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0_u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&write_wire_u32(self.id.get()));
        bytes[4] = self.flags();
        bytes[5..7].copy_from_slice(&write_wire_u16(u16::from(self.index)));
        bytes[7..9].copy_from_slice(&write_wire_u16(self.total));
        bytes
    }

    /// Decode a header from its fixed wire form.
    ///
    /// Decoding never fails: reserved flag bits are ignored and the
    /// relationship between index and total is not checked.
    #[must_use]
    pub fn decode(bytes: &[u8; HEADER_SIZE]) -> Self {
        let [i0, i1, i2, i3, flags, x0, x1, t0, t1] = *bytes;
        Self {
            id: GroupId::new(from_wire_u32([i0, i1, i2, i3])),
            fragmented: flags & FRAGMENTED_FLAG != 0,
            index: FragmentIndex::new(from_wire_u16([x0, x1])),
            total: from_wire_u16([t0, t1]),
        }
    }
}
