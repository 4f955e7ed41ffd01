//! Minimum population change required to gain or lose a voting seat.
//!
//! Three-stage grid search over whole people: probe at 10 000-person
//! resolution until the seat count flips, back off one coarse step, re-scan
//! at 100, then at 1. The final answer is exact to the person.
//!
//! Infeasible requests (the shift operator reports the pool is exhausted, or
//! a one-seat state is asked to lose) come back as `Ok(None)`. A seat count
//! that jumps by more than one in a single probe, or a scan that leaves the
//! bound, is a hard error.

use hr_core::{House, PopType, St, TrueTable, Year};
use tracing::{debug, trace};

use crate::apportion::assign_house_seats_priority;
use crate::error::AlgoError;
use crate::shifts::{change_pop_of_state, shift_pop_from_entire_us_to_state};

/// Direction of the sought seat change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Add,
    Lose,
}

/// How the probe alters the state's population.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopChangeMode {
    /// Change one state's population in place; the US total moves with it.
    ChangePop,
    /// Shift population between the state and the rest of the country; the
    /// US total is conserved.
    ShiftPop,
}

/// Apportionment outcome after one probe.
#[derive(Clone, Debug)]
pub struct AssignmentsAfterChange {
    pub house: House,
    /// Voting seats held by the probed state.
    pub voting_seats: u32,
}

/// Probe resolutions, coarse to exact, in people.
const RESOLUTIONS_PEOPLE: [i64; 3] = [10_000, 100, 1];

/// Give up once a scan moves this far without a seat change.
const BOUND_PEOPLE: i64 = 1_000_000;

/// Apply a conserved shift of `pop_shift_millions` into `st`, then run the
/// priority apportionment. `Ok(None)` when the shift itself is infeasible.
pub fn calculate_assignments_with_pop_shift(
    table: &TrueTable,
    year: Year,
    pop_type: PopType,
    st: St,
    pop_shift_millions: f64,
) -> Result<Option<AssignmentsAfterChange>, AlgoError> {
    let mut house = House::new(table, year, pop_type)?;
    if shift_pop_from_entire_us_to_state(&mut house, st, pop_shift_millions).is_err() {
        return Ok(None);
    }
    assign_house_seats_priority(&mut house)?;
    let voting_seats = house.states[&st].no_reps.voting;
    Ok(Some(AssignmentsAfterChange { house, voting_seats }))
}

/// Apply an in-place change of `pop_change_millions` to `st`, then run the
/// priority apportionment. `Ok(None)` when the change is infeasible.
pub fn calculate_assignments_with_pop_change(
    table: &TrueTable,
    year: Year,
    pop_type: PopType,
    st: St,
    pop_change_millions: f64,
) -> Result<Option<AssignmentsAfterChange>, AlgoError> {
    let mut house = House::new(table, year, pop_type)?;
    if change_pop_of_state(&mut house, st, pop_change_millions).is_err() {
        return Ok(None);
    }
    assign_house_seats_priority(&mut house)?;
    let voting_seats = house.states[&st].no_reps.voting;
    Ok(Some(AssignmentsAfterChange { house, voting_seats }))
}

/// Find the minimum population change (in millions, signed) that makes `st`
/// gain or lose exactly one voting seat.
///
/// Returns `Ok(None)` when no such change exists: a one-seat state cannot
/// lose (the mandatory minimum holds it at 1), and a probe can run out of
/// population to move.
pub fn find_min_pop_change_required(
    table: &TrueTable,
    year: Year,
    pop_type: PopType,
    st: St,
    target: Target,
    mode: PopChangeMode,
) -> Result<Option<f64>, AlgoError> {
    if st.is_dc() {
        return Err(AlgoError::DcHasNoVotingSeats);
    }

    let mut baseline = House::new(table, year, pop_type)?;
    assign_house_seats_priority(&mut baseline)?;
    let seats_before = baseline.states[&st].no_reps.voting;

    if target == Target::Lose && seats_before == 1 {
        debug!(st = %st, "state holds the mandatory minimum; it cannot lose a seat");
        return Ok(None);
    }
    let seats_wanted = match target {
        Target::Add => seats_before + 1,
        Target::Lose => seats_before - 1,
    };

    let mut pop_change: i64 = 0;
    let mut prev_step: i64 = 0;
    for resolution in RESOLUTIONS_PEOPLE {
        let step = match target {
            Target::Add => resolution,
            Target::Lose => -resolution,
        };
        // Re-open the window one coarse step below the last hit; the hit
        // itself stays reachable, so each scan is guaranteed to terminate.
        if pop_change != 0 {
            pop_change -= prev_step;
        }

        loop {
            pop_change += step;
            if pop_change.abs() > BOUND_PEOPLE {
                return Err(AlgoError::SearchBoundExceeded { st, bound_people: BOUND_PEOPLE });
            }

            let millions = pop_change as f64 / 1e6;
            let outcome = match mode {
                PopChangeMode::ShiftPop => {
                    calculate_assignments_with_pop_shift(table, year, pop_type, st, millions)?
                }
                PopChangeMode::ChangePop => {
                    calculate_assignments_with_pop_change(table, year, pop_type, st, millions)?
                }
            };
            let Some(after) = outcome else {
                debug!(st = %st, pop_change_people = pop_change, "probe infeasible; no minimum exists");
                return Ok(None);
            };

            trace!(st = %st, pop_change_people = pop_change, seats = after.voting_seats, "probe");
            if after.voting_seats == seats_before {
                continue;
            }
            if after.voting_seats != seats_wanted {
                return Err(AlgoError::SeatJump {
                    st,
                    seats_before,
                    seats_after: after.voting_seats,
                    pop_change_people: pop_change,
                });
            }
            break;
        }
        prev_step = step;
    }

    debug!(st = %st, ?target, ?mode, pop_change_people = pop_change, "minimum found");
    Ok(Some(pop_change as f64 / 1e6))
}
