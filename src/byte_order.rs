//! Helpers for the little-endian integers used on the wire.
//!
//! Every multi-byte field in a fragment frame is little-endian. Keeping the
//! conversions here means codec code reads fixed-width fields by offset
//! without sprinkling slice-to-array plumbing through the decoders.

/// Serialise a `u16` in wire byte order (little-endian).
///
/// # Examples
///
/// ```
/// use datagram_fragment::byte_order::write_wire_u16;
///
/// assert_eq!(write_wire_u16(0x1234), [0x34, 0x12]);
/// ```
#[must_use]
pub const fn write_wire_u16(value: u16) -> [u8; 2] { value.to_le_bytes() }

/// Serialise a `u32` in wire byte order (little-endian).
///
/// # Examples
///
/// ```
/// use datagram_fragment::byte_order::write_wire_u32;
///
/// assert_eq!(write_wire_u32(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
/// ```
#[must_use]
pub const fn write_wire_u32(value: u32) -> [u8; 4] { value.to_le_bytes() }

/// Interpret two bytes in wire byte order.
///
/// # Examples
///
/// ```
/// use datagram_fragment::byte_order::from_wire_u16;
///
/// assert_eq!(from_wire_u16([0x34, 0x12]), 0x1234);
/// ```
#[must_use]
pub const fn from_wire_u16(field: [u8; 2]) -> u16 { u16::from_le_bytes(field) }

/// Interpret four bytes in wire byte order.
#[must_use]
pub const fn from_wire_u32(field: [u8; 4]) -> u32 { u32::from_le_bytes(field) }

/// Read a wire-order `u16` starting at `offset`.
///
/// Returns `None` if fewer than two bytes remain.
///
/// # Examples
///
/// ```
/// use datagram_fragment::byte_order::read_wire_u16;
///
/// assert_eq!(read_wire_u16(&[0xff, 0x34, 0x12], 1), Some(0x1234));
/// assert_eq!(read_wire_u16(&[0x34], 0), None);
/// ```
#[must_use]
pub fn read_wire_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let field: [u8; 2] = bytes.get(offset..end)?.try_into().ok()?;
    Some(from_wire_u16(field))
}

/// Read a wire-order `u32` starting at `offset`.
///
/// Returns `None` if fewer than four bytes remain.
///
/// # Examples
///
/// ```
/// use datagram_fragment::byte_order::read_wire_u32;
///
/// assert_eq!(read_wire_u32(&[0x78, 0x56, 0x34, 0x12], 0), Some(0x1234_5678));
/// ```
#[must_use]
pub fn read_wire_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let field: [u8; 4] = bytes.get(offset..end)?.try_into().ok()?;
    Some(from_wire_u32(field))
}
