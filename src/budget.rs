//! Size budget deciding how many payload bytes fit in one fragment.
//!
//! The budget starts from a datagram MTU and subtracts everything that is not
//! payload: headroom reserved for lower layers, the assumed IP and UDP
//! headers, and the fixed framing added by this crate. The default budget is
//! evaluated at compile time and yields [`MAX_PAYLOAD_SIZE`].

/// Fixed size of an encoded [`Header`](crate::fragment::Header).
pub const HEADER_SIZE: usize = 9;

/// Size of the little-endian payload length prefix.
pub const PAYLOAD_LEN_SIZE: usize = 2;

/// Size of the trailing CRC32 checksum.
pub const CHECKSUM_SIZE: usize = 4;

/// Framing bytes added around every payload.
pub const FRAME_OVERHEAD: usize = HEADER_SIZE + PAYLOAD_LEN_SIZE + CHECKSUM_SIZE;

/// Smallest buffer that can hold a frame (one with an empty payload).
pub const MIN_FRAME_SIZE: usize = FRAME_OVERHEAD;

/// Default network MTU assumed for the datagram transport.
pub const DEFAULT_MTU: usize = 1500;

/// Headroom reserved for lower-layer headers and tunnelling.
pub const RESERVED_OVERHEAD: usize = 100;

/// Assumed UDP header size.
pub const UDP_OVERHEAD: usize = 8;

/// Assumed IP header size (IPv6 without extension headers).
pub const IP_OVERHEAD: usize = 40;

/// Maximum payload bytes carried by a single fragment.
pub const MAX_PAYLOAD_SIZE: usize = match SizeBudget::DEFAULT.max_payload_size() {
    Some(size) => size,
    None => panic!("default size budget leaves no room for payload"),
};

/// Largest encoded frame produced under the default budget.
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + FRAME_OVERHEAD;

/// Inputs used to derive the per-fragment payload capacity.
///
/// # Examples
///
/// ```
/// use datagram_fragment::budget::{MAX_PAYLOAD_SIZE, SizeBudget};
///
/// assert_eq!(SizeBudget::DEFAULT.max_payload_size(), Some(MAX_PAYLOAD_SIZE));
///
/// let jumbo = SizeBudget { mtu: 9000, ..SizeBudget::DEFAULT };
/// assert_eq!(jumbo.max_payload_size(), Some(8837));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SizeBudget {
    /// Link MTU in bytes.
    pub mtu: usize,
    /// Bytes held back for lower-layer headers.
    pub reserved: usize,
    /// Assumed UDP header size.
    pub udp_overhead: usize,
    /// Assumed IP header size.
    pub ip_overhead: usize,
}

impl SizeBudget {
    /// The budget used by the splitter.
    pub const DEFAULT: Self = Self {
        mtu: DEFAULT_MTU,
        reserved: RESERVED_OVERHEAD,
        udp_overhead: UDP_OVERHEAD,
        ip_overhead: IP_OVERHEAD,
    };

    /// Bytes consumed by everything except the payload.
    ///
    /// Returns `None` if the sum overflows `usize`.
    #[must_use]
    pub const fn overhead(&self) -> Option<usize> {
        let Some(transport) = self.udp_overhead.checked_add(self.ip_overhead) else {
            return None;
        };
        let Some(lower) = self.reserved.checked_add(transport) else {
            return None;
        };
        lower.checked_add(FRAME_OVERHEAD)
    }

    /// Payload capacity of one fragment under this budget.
    ///
    /// Returns `None` when the overhead leaves no room for payload or when
    /// the capacity cannot be expressed by the 16-bit length prefix.
    #[must_use]
    pub const fn max_payload_size(&self) -> Option<usize> {
        let Some(overhead) = self.overhead() else {
            return None;
        };
        if self.mtu <= overhead {
            return None;
        }
        let capacity = self.mtu - overhead;
        if capacity > u16::MAX as usize {
            return None;
        }
        Some(capacity)
    }

    /// Largest encoded frame this budget admits.
    #[must_use]
    pub const fn frame_ceiling(&self) -> Option<usize> {
        match self.max_payload_size() {
            Some(capacity) => Some(capacity + FRAME_OVERHEAD),
            None => None,
        }
    }
}

impl Default for SizeBudget {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_budget_matches_documented_capacity() {
        assert_eq!(MAX_PAYLOAD_SIZE, 1337);
        assert_eq!(FRAME_OVERHEAD, 15);
        assert_eq!(MAX_FRAME_SIZE, 1352);
        assert_eq!(SizeBudget::default().frame_ceiling(), Some(MAX_FRAME_SIZE));
    }

    #[rstest]
    #[case::exactly_overhead(163)]
    #[case::below_overhead(64)]
    fn budget_without_room_for_payload_is_rejected(#[case] mtu: usize) {
        let budget = SizeBudget {
            mtu,
            ..SizeBudget::DEFAULT
        };
        assert_eq!(budget.max_payload_size(), None);
        assert_eq!(budget.frame_ceiling(), None);
    }

    #[test]
    fn budget_exceeding_length_prefix_is_rejected() {
        let budget = SizeBudget {
            mtu: 70_000,
            ..SizeBudget::DEFAULT
        };
        assert_eq!(budget.max_payload_size(), None);
    }

    #[test]
    fn overflowing_overhead_is_rejected() {
        let budget = SizeBudget {
            reserved: usize::MAX,
            ..SizeBudget::DEFAULT
        };
        assert_eq!(budget.overhead(), None);
        assert_eq!(budget.max_payload_size(), None);
    }
}
