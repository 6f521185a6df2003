//! Integration tests for the on-wire fragment layout and the receive path.

mod common;

use bytes::Bytes;
use common::{TestResult, patterned_payload};
use datagram_fragment::{
    DecodeError,
    Fragment,
    FragmentIndex,
    GroupId,
    Header,
    MAX_FRAME_SIZE,
    MAX_PAYLOAD_SIZE,
    budget::{DEFAULT_MTU, IP_OVERHEAD, UDP_OVERHEAD},
    join,
    split,
    try_join,
};
use rstest::rstest;

#[test]
fn reference_fragment_matches_documented_bytes() {
    let header = Header::new(GroupId::new(1), false, FragmentIndex::zero(), 0);
    let fragment = Fragment::new(header, vec![10_u8, 20, 30, 40, 50, 60]);
    let crc = crc32fast::hash(&[10, 20, 30, 40, 50, 60]).to_le_bytes();

    let encoded = fragment.encode();
    assert_eq!(
        &encoded[..17],
        &[
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x00, 0x0a, 0x14, 0x1e,
            0x28, 0x32, 0x3c,
        ]
    );
    assert_eq!(&encoded[17..], &crc);
}

#[test]
fn largest_frame_fits_the_datagram_budget() -> TestResult {
    let batch = split(GroupId::new(2), patterned_payload(MAX_PAYLOAD_SIZE * 3))?;
    for frame in batch.encode_all() {
        assert_eq!(frame.len(), MAX_FRAME_SIZE);
        assert!(frame.len() + IP_OVERHEAD + UDP_OVERHEAD <= DEFAULT_MTU);
    }
    Ok(())
}

#[test]
fn frames_survive_a_simulated_transport() -> TestResult {
    let payload = patterned_payload(10_000);
    let frames = split(GroupId::new(0xdead_beef), payload.clone())?.encode_all();

    // Copy each datagram into a fresh receive buffer, as a socket would.
    let mut received = Vec::with_capacity(frames.len());
    for frame in &frames {
        let datagram = frame.to_vec();
        let fragment = Fragment::decode(Bytes::from(datagram))?;
        fragment.verify_checksum()?;
        received.push(fragment);
    }

    assert!(
        received
            .iter()
            .all(|fragment| fragment.header().id() == GroupId::new(0xdead_beef))
    );
    assert_eq!(try_join(&received)?, payload);
    assert_eq!(join(&received), payload);
    Ok(())
}

#[rstest]
#[case::header_only(vec![0_u8; 9], DecodeError::ShortBuffer { len: 9, min: 15 })]
#[case::declared_too_long(
    {
        let mut frame = vec![0_u8; 15];
        frame[9] = 1;
        frame
    },
    DecodeError::LengthMismatch { declared: 1, required: 16, available: 15 }
)]
#[case::declared_max(
    {
        let mut frame = vec![0_u8; 20];
        frame[9] = 0xff;
        frame[10] = 0xff;
        frame
    },
    DecodeError::LengthMismatch { declared: u16::MAX, required: 65_550, available: 20 }
)]
fn malformed_frames_are_rejected(#[case] frame: Vec<u8>, #[case] expected: DecodeError) {
    assert_eq!(Fragment::decode_slice(&frame), Err(expected));
}

#[test]
fn decoded_frames_with_oversized_payloads_are_still_accepted() {
    // A peer with a larger budget may send more than this side would produce.
    let payload_len = MAX_PAYLOAD_SIZE + 10;
    let mut frame = Vec::with_capacity(payload_len + 15);
    frame.extend_from_slice(&[3, 0, 0, 0, 1, 0, 0, 1, 0]);
    frame.extend_from_slice(&u16::try_from(payload_len).unwrap_or_default().to_le_bytes());
    frame.extend(std::iter::repeat_n(0x5a_u8, payload_len));
    frame.extend_from_slice(&[0, 0, 0, 0]);

    let fragment = Fragment::decode_slice(&frame).expect("decoder does not enforce the budget");
    assert_eq!(fragment.payload().len(), payload_len);
    assert!(!fragment.has_valid_checksum());
}
