//! hr_algo — Apportionment and analysis algorithms over `hr_core` types.
//!
//! Pure computation, no I/O:
//!
//! - Huntington-Hill priority apportionment (plus a divisor-rounding
//!   cross-check and the continuous fair-share baseline)
//! - Population shift/change operators with conservation guarantees
//! - Minimum-population-change grid search, exact to the person
//! - Residents-per-representative summaries
//! - Actual and fractionally-rescaled roll-call tallies
//!
//! Everything is deterministic: maps are `BTreeMap`s keyed by closed enums,
//! and ties resolve by declaration order.

#![forbid(unsafe_code)]

pub mod apportion;
pub mod error;
pub mod residents;
pub mod search;
pub mod shifts;
pub mod voting;

pub use apportion::{
    assign_house_seats_divisor, assign_house_seats_priority, assign_house_seats_priority_logged,
    fractional_shares, ApportionError, PriorityAward, PriorityLog,
};
pub use error::AlgoError;
pub use residents::{calculate_residents_per_rep_for_year, ResidentsPerRep};
pub use search::{
    calculate_assignments_with_pop_change, calculate_assignments_with_pop_shift,
    find_min_pop_change_required, AssignmentsAfterChange, PopChangeMode, Target,
};
pub use shifts::{
    change_pop_of_state, shift_pop_from_entire_us_to_state,
    shift_pop_from_entire_us_to_state_by_global_percentage,
    shift_pop_from_entire_us_to_state_by_local_percentage, shift_pop_from_state_to_entire_us,
    shift_pop_from_state_to_state, ShiftError,
};
pub use voting::{
    CalculateVotes, FractionalVoteResults, MajorityDecision, MissingMemberPolicy, VoteOptions,
    VoteResults,
};
