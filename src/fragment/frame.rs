//! Wire codec for a single checksummed fragment.
//!
//! A frame is the encoded [`Header`], a little-endian `u16` payload length,
//! the payload bytes, and a little-endian CRC32 of the payload:
//!
//! ```text
//! [header: 9][len: 2][payload: len][crc32: 4]
//! ```
//!
//! Decoding trusts the carried checksum. Callers that need integrity
//! guarantees call [`Fragment::verify_checksum`] after decoding.

use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

use super::{DecodeError, Header, VerifyError};
use crate::{
    budget::{
        CHECKSUM_SIZE,
        FRAME_OVERHEAD,
        HEADER_SIZE,
        MAX_PAYLOAD_SIZE,
        MIN_FRAME_SIZE,
        PAYLOAD_LEN_SIZE,
    },
    byte_order::{read_wire_u16, read_wire_u32},
};

const PAYLOAD_OFFSET: usize = HEADER_SIZE + PAYLOAD_LEN_SIZE;

/// Compute the CRC32 (IEEE 802.3 polynomial) carried by fragments.
///
/// # Examples
///
/// ```
/// use datagram_fragment::fragment::checksum;
/// assert_eq!(checksum(b"123456789"), 0xcbf4_3926);
/// ```
#[must_use]
pub fn checksum(payload: &[u8]) -> u32 { crc32fast::hash(payload) }

/// Immutable, self-contained unit of transmission.
///
/// The payload is held as [`Bytes`], so fragments produced by
/// [`split`](crate::fragment::split) or [`Fragment::decode`] share the
/// allocation they were cut from instead of copying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    header: Header,
    size: u16,
    payload: Bytes,
    checksum: u32,
}

impl Fragment {
    /// Build a fragment, computing the checksum of `payload`.
    ///
    /// # Panics
    ///
    /// Panics if `payload` is longer than [`MAX_PAYLOAD_SIZE`]. Oversized
    /// payloads are a caller bug: [`split`](crate::fragment::split) never
    /// produces them.
    ///
    /// # Examples
    ///
    /// ```
    /// use datagram_fragment::fragment::{Fragment, FragmentIndex, GroupId, Header, checksum};
    /// let header = Header::new(GroupId::new(1), false, FragmentIndex::zero(), 0);
    /// let fragment = Fragment::new(header, vec![10, 20, 30]);
    /// assert_eq!(fragment.size(), 3);
    /// assert_eq!(fragment.checksum(), checksum(&[10, 20, 30]));
    /// ```
    #[must_use]
    pub fn new(header: Header, payload: impl Into<Bytes>) -> Self {
        let payload = payload.into();
        let size = u16::try_from(payload.len())
            .ok()
            .filter(|size| usize::from(*size) <= MAX_PAYLOAD_SIZE)
            .unwrap_or_else(|| {
                panic!(
                    "fragment payload of {} bytes exceeds the {MAX_PAYLOAD_SIZE} byte limit",
                    payload.len()
                )
            });
        let checksum = checksum(&payload);
        Self {
            header,
            size,
            payload,
            checksum,
        }
    }

    /// Return the fragment header.
    #[must_use]
    pub const fn header(&self) -> &Header { &self.header }

    /// Return the payload length in bytes.
    #[must_use]
    pub const fn size(&self) -> u16 { self.size }

    /// Return the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] { &self.payload }

    /// Return the carried CRC32 of the payload.
    #[must_use]
    pub const fn checksum(&self) -> u32 { self.checksum }

    /// Consume the fragment, returning its header and payload.
    #[must_use]
    pub fn into_parts(self) -> (Header, Bytes) { (self.header, self.payload) }

    /// Number of bytes [`encode`](Self::encode) produces.
    #[must_use]
    pub fn encoded_len(&self) -> usize { FRAME_OVERHEAD + self.payload.len() }

    /// Append the encoded frame to `dst`.
    pub fn encode_into(&self, dst: &mut BytesMut) {
        dst.reserve(self.encoded_len());
        dst.put_slice(&self.header.encode());
        dst.put_u16_le(self.size);
        dst.put_slice(&self.payload);
        dst.put_u32_le(self.checksum);
    }

    /// Encode the fragment into a standalone frame.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf.freeze()
    }

    /// Decode a frame, sharing `frame`'s allocation for the payload.
    ///
    /// Bytes after the checksum are ignored. The checksum is returned as
    /// carried and is not compared against the payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ShortBuffer`] when `frame` is shorter than
    /// [`MIN_FRAME_SIZE`], and [`DecodeError::LengthMismatch`] when the
    /// declared payload length runs past the end of `frame`.
    pub fn decode(frame: Bytes) -> Result<Self, DecodeError> {
        let available = frame.len();
        let short = DecodeError::ShortBuffer {
            len: available,
            min: MIN_FRAME_SIZE,
        };
        if available < MIN_FRAME_SIZE {
            return Err(rejected(short));
        }

        let header = frame
            .first_chunk::<HEADER_SIZE>()
            .map(Header::decode)
            .ok_or_else(|| rejected(short))?;
        let declared = read_wire_u16(&frame, HEADER_SIZE).ok_or_else(|| rejected(short))?;

        let payload_end = PAYLOAD_OFFSET + usize::from(declared);
        let required = payload_end + CHECKSUM_SIZE;
        let mismatch = DecodeError::LengthMismatch {
            declared,
            required,
            available,
        };
        if available < required {
            return Err(rejected(mismatch));
        }
        let checksum = read_wire_u32(&frame, payload_end).ok_or_else(|| rejected(mismatch))?;

        Ok(Self {
            header,
            size: declared,
            payload: frame.slice(PAYLOAD_OFFSET..payload_end),
            checksum,
        })
    }

    /// Decode a frame from a borrowed buffer, copying the payload.
    ///
    /// The returned fragment owns its bytes and does not keep `frame` alive.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`decode`](Self::decode).
    pub fn decode_slice(frame: &[u8]) -> Result<Self, DecodeError> {
        Self::decode(Bytes::copy_from_slice(frame))
    }

    /// Report whether the carried checksum matches the payload.
    #[must_use]
    pub fn has_valid_checksum(&self) -> bool { checksum(&self.payload) == self.checksum }

    /// Recompute the payload checksum and compare it with the carried one.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ChecksumMismatch`] when they differ.
    pub fn verify_checksum(&self) -> Result<(), VerifyError> {
        let actual = checksum(&self.payload);
        if actual == self.checksum {
            return Ok(());
        }
        debug!(
            "fragment checksum mismatch: group_id={}, index={}, expected={:#010x}, \
             actual={actual:#010x}",
            self.header.id(),
            self.header.index(),
            self.checksum
        );
        Err(VerifyError::ChecksumMismatch {
            expected: self.checksum,
            actual,
        })
    }
}

fn rejected(err: DecodeError) -> DecodeError {
    debug!("rejected fragment frame: error={err}");
    err
}
