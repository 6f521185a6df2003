//! Fragment codec: header and frame encoding, splitting and joining.
//!
//! Each sub-module focuses on a single concept. Everything here is a pure
//! function over its inputs; grouping received fragments by identifier and
//! ordering them is left to the caller.

pub mod error;
pub mod frame;
pub mod header;
pub mod id;
pub mod index;
pub mod joiner;
pub mod series;
pub mod splitter;

pub use error::{DecodeError, JoinError, SplitError, VerifyError};
pub use frame::{Fragment, checksum};
pub use header::Header;
pub use id::{GroupId, GroupIdSequence};
pub use index::FragmentIndex;
pub use joiner::{join, try_join};
pub use series::{GroupStatus, GroupValidator};
pub use splitter::{FragmentBatch, Fragmenter, split, split_slice};
