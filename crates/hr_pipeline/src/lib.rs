//! hr_pipeline — Orchestration over the loading and algorithm layers.
//!
//! Three jobs:
//!
//! - Build an apportioned House and verify it against the certified
//!   historical seat counts ([`apportioned_house_for_year`]).
//! - Cross-check computed roll-call tallies against the published counts
//!   ([`check_tally_consistency`]).
//! - Run the fractional-vote analysis over a whole congress
//!   ([`analyze_congress`]).

#![forbid(unsafe_code)]

pub mod analyze;
pub mod consistency;
pub mod error;
pub mod house;

pub use analyze::{analyze_congress, CongressAnalysis, RollAnalysis};
pub use consistency::{check_tally_consistency, TallyConsistency};
pub use error::PipelineError;
pub use house::{apportioned_house_for_congress, apportioned_house_for_year};
