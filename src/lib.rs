#![doc(html_root_url = "https://docs.rs/datagram-fragment/latest")]
//! Public API for the `datagram-fragment` library.
//!
//! Splits byte payloads into checksummed fragments that fit a datagram MTU
//! and joins them back together. The crate is a stateless codec: it keeps no
//! reassembly sessions and performs no I/O.
//!
//! ```
//! use datagram_fragment::{Fragment, GroupId, join, split};
//!
//! let payload = vec![42_u8; 4000];
//! let frames = split(GroupId::new(1), payload.clone()).expect("split").encode_all();
//!
//! let received = frames
//!     .into_iter()
//!     .map(Fragment::decode)
//!     .collect::<Result<Vec<_>, _>>()
//!     .expect("decode");
//! assert_eq!(join(&received), payload);
//! ```

pub mod budget;
pub mod byte_order;
pub mod fragment;

pub use budget::{MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE, SizeBudget};
pub use fragment::{
    DecodeError,
    Fragment,
    FragmentBatch,
    FragmentIndex,
    Fragmenter,
    GroupId,
    GroupIdSequence,
    GroupStatus,
    GroupValidator,
    Header,
    JoinError,
    SplitError,
    VerifyError,
    checksum,
    join,
    split,
    split_slice,
    try_join,
};
