//! hr_core — Core types for House apportionment.
//!
//! This crate is **I/O-free**. It defines the stable types used across the
//! workspace (`hr_io`, `hr_algo`, `hr_pipeline`, `hr_cli`):
//!
//! - Closed jurisdiction/year/cast-code enums (`St`, `Year`, `CastCode`)
//! - Population snapshots (`Pop`, `PopType`) and mean helpers
//! - The mutable `House`/`StateWorking` aggregate with explicit snapshots
//! - Roll-call input entities (`RollVotes`, `RollCall`, `Members`)
//! - Reference-vs-working validation helpers
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod entities;
pub mod errors;
pub mod house;
pub mod jurisdiction;
pub mod population;
pub mod validate;
pub mod voting;
pub mod year;

// Convenience re-exports (downstream crates import these from the root).
pub use entities::{NoReps, StateTrue, StateWorking, TrueTable};
pub use errors::CoreError;
pub use house::{House, ELECTORAL_VOTES, VOTING_HOUSE_SEATS};
pub use jurisdiction::St;
pub use population::{arithmetic_mean, geometric_mean, harmonic_mean, Pop, PopType};
pub use validate::{
    validate_electoral_total, validate_no_reps_matches_true, validate_total_pop_matches_true,
    ValidationError, POP_TOLERANCE_MILLIONS,
};
pub use voting::{CastCode, Icpsr, Members, RollCall, RollCallsAll, RollVotes, VotesAll};
pub use year::{census_year_for_congress, Year};
