//! hr_io — Loading layer for the apportionment workspace.
//!
//! Two sources feed the rest of the workspace:
//!
//! - The census/apportionment reference table, compiled into the binary
//!   ([`load_states_true`]); no runtime file is needed for apportionment.
//! - The VoteView roll-call exports, read from CSV files on disk
//!   ([`voteview`]).
//!
//! All fallible paths return [`IoError`]; this crate never panics on bad
//! input.

#![forbid(unsafe_code)]

pub mod error;
pub mod reference;
pub mod voteview;

pub use error::IoError;
pub use reference::load_states_true;
pub use voteview::{load_members, load_rollcalls, load_rollvotes, load_rollvotes_all};
