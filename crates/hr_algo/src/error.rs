//! Unified error type for the algorithm layer.

use core::fmt;

use hr_core::{CoreError, Icpsr, St};

use crate::apportion::ApportionError;

#[derive(Clone, Debug, PartialEq)]
pub enum AlgoError {
    Core(CoreError),
    Apportion(ApportionError),
    /// A single grid-search step changed the seat count by more than one.
    /// The probe resolution skipped over a threshold; treat as a bug, not a
    /// recoverable outcome.
    SeatJump { st: St, seats_before: u32, seats_after: u32, pop_change_people: i64 },
    /// The search walked past its bound without observing a seat change.
    SearchBoundExceeded { st: St, bound_people: i64 },
    /// DC never holds voting seats, so seat-change searches on it are
    /// meaningless.
    DcHasNoVotingSeats,
    /// A roll-call vote references a member with no state on record.
    MissingMember { icpsr: Icpsr },
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgoError::Core(e) => write!(f, "{e}"),
            AlgoError::Apportion(e) => write!(f, "{e}"),
            AlgoError::SeatJump { st, seats_before, seats_after, pop_change_people } => write!(
                f,
                "seat count for {st} jumped {seats_before} -> {seats_after} in one step (pop change {pop_change_people} people)"
            ),
            AlgoError::SearchBoundExceeded { st, bound_people } => write!(
                f,
                "no seat change for {st} within +/-{bound_people} people"
            ),
            AlgoError::DcHasNoVotingSeats => {
                write!(f, "DC holds no voting seats; seat-change search does not apply")
            }
            AlgoError::MissingMember { icpsr } => {
                write!(f, "no state on record for member icpsr {icpsr}")
            }
        }
    }
}

impl std::error::Error for AlgoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlgoError::Core(e) => Some(e),
            AlgoError::Apportion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for AlgoError {
    fn from(e: CoreError) -> AlgoError {
        AlgoError::Core(e)
    }
}

impl From<ApportionError> for AlgoError {
    fn from(e: ApportionError) -> AlgoError {
        AlgoError::Apportion(e)
    }
}
