//! Population shift/change operators.
//!
//! The shift family is zero-sum: whatever enters (or leaves) one state is
//! removed from (or spread over) the rest of the country in proportion to
//! each state's share of the remaining population, so the US total is
//! conserved to within [`hr_core::POP_TOLERANCE_MILLIONS`]. The lone
//! exception is [`change_pop_of_state`], which alters the total on purpose.
//!
//! Infeasible requests come back as typed, recoverable errors; the search
//! layer treats them as "no such shift possible".

use core::fmt;

use hr_core::{House, St};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum ShiftError {
    /// More population was requested into a state than exists in the rest of
    /// the country.
    ExceedsAvailablePool { st: St, requested_millions: f64, available_millions: f64 },
    /// The operation would drive a state's population below zero.
    MakesStatePopNegative { st: St, pop_millions: f64, delta_millions: f64 },
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftError::ExceedsAvailablePool { st, requested_millions, available_millions } => {
                write!(
                    f,
                    "cannot move {requested_millions:.6}M into {st}: only {available_millions:.6}M available elsewhere"
                )
            }
            ShiftError::MakesStatePopNegative { st, pop_millions, delta_millions } => {
                write!(
                    f,
                    "removing {:.6}M from {st} (pop {pop_millions:.6}M) would make its population negative",
                    -delta_millions
                )
            }
        }
    }
}

impl std::error::Error for ShiftError {}

/// Move `percent` (in [0,1]) of one state's population out, spreading it over
/// every other state in proportion to its share of the remaining population.
pub fn shift_pop_from_state_to_entire_us(house: &mut House, st_from: St, percent: f64) {
    assert!((0.0..=1.0).contains(&percent), "percent must be in [0,1]");

    let before = house.total_pop();
    let no_leave = house.states[&st_from].pop * percent;
    house
        .states
        .get_mut(&st_from)
        .expect("closed jurisdiction set")
        .pop -= no_leave;

    let total_other = house.total_pop_excluding(&[st_from]);
    for state in house.states.values_mut() {
        if state.st == st_from {
            continue;
        }
        let frac = state.pop / total_other;
        state.pop += frac * no_leave;
    }

    debug!(st = %st_from, moved_millions = no_leave, "shifted population out to the rest of the US");
    debug_assert!((house.total_pop() - before).abs() < hr_core::POP_TOLERANCE_MILLIONS);
}

/// Move `percent` (in [0,1]) of the rest of the country's population into one
/// state, drawn from each other state in proportion to its share.
pub fn shift_pop_from_entire_us_to_state_by_global_percentage(
    house: &mut House,
    st_to: St,
    percent: f64,
) {
    assert!((0.0..=1.0).contains(&percent), "percent must be in [0,1]");

    let before = house.total_pop();
    let total_other = house.total_pop_excluding(&[st_to]);
    let no_arrive = total_other * percent;

    house
        .states
        .get_mut(&st_to)
        .expect("closed jurisdiction set")
        .pop += no_arrive;
    for state in house.states.values_mut() {
        if state.st == st_to {
            continue;
        }
        let frac = state.pop / total_other;
        state.pop -= frac * no_arrive;
    }

    debug!(st = %st_to, moved_millions = no_arrive, "shifted population in from the rest of the US");
    debug_assert!((house.total_pop() - before).abs() < hr_core::POP_TOLERANCE_MILLIONS);
}

/// Move population into a state sized as `percent` (in [0,1]) of that state's
/// own population, drawn proportionally from everywhere else.
pub fn shift_pop_from_entire_us_to_state_by_local_percentage(
    house: &mut House,
    st_to: St,
    percent: f64,
) -> Result<(), ShiftError> {
    let no_arrive = house.states[&st_to].pop * percent;
    shift_pop_from_entire_us_to_state(house, st_to, no_arrive)
}

/// Move a signed amount (millions) into a state from the complementary pool.
///
/// Negative amounts move people out of the state. Fails (recoverably) when
/// the pool cannot supply the amount or the state would go negative.
pub fn shift_pop_from_entire_us_to_state(
    house: &mut House,
    st_to: St,
    pop_shift_millions: f64,
) -> Result<(), ShiftError> {
    let before = house.total_pop();
    let total_other = house.total_pop_excluding(&[st_to]);
    if pop_shift_millions > total_other {
        return Err(ShiftError::ExceedsAvailablePool {
            st: st_to,
            requested_millions: pop_shift_millions,
            available_millions: total_other,
        });
    }
    let pop_to = house.states[&st_to].pop;
    if pop_to + pop_shift_millions < 0.0 {
        return Err(ShiftError::MakesStatePopNegative {
            st: st_to,
            pop_millions: pop_to,
            delta_millions: pop_shift_millions,
        });
    }

    house
        .states
        .get_mut(&st_to)
        .expect("closed jurisdiction set")
        .pop += pop_shift_millions;
    for state in house.states.values_mut() {
        if state.st == st_to {
            continue;
        }
        let frac = state.pop / total_other;
        state.pop -= frac * pop_shift_millions;
    }

    debug!(st = %st_to, moved_millions = pop_shift_millions, "shifted population between a state and the rest of the US");
    debug_assert!((house.total_pop() - before).abs() < hr_core::POP_TOLERANCE_MILLIONS);
    Ok(())
}

/// Move `percent` (in [0,1]) of one state's population directly to another.
pub fn shift_pop_from_state_to_state(house: &mut House, st_from: St, st_to: St, percent: f64) {
    assert!((0.0..=1.0).contains(&percent), "percent must be in [0,1]");

    let before = house.total_pop();
    let no_leave = house.states[&st_from].pop * percent;
    house
        .states
        .get_mut(&st_from)
        .expect("closed jurisdiction set")
        .pop -= no_leave;
    house
        .states
        .get_mut(&st_to)
        .expect("closed jurisdiction set")
        .pop += no_leave;

    debug!(from = %st_from, to = %st_to, moved_millions = no_leave, "shifted population state to state");
    debug_assert!((house.total_pop() - before).abs() < hr_core::POP_TOLERANCE_MILLIONS);
}

/// Add a signed amount (millions) to one state only. The US total changes by
/// the same amount; this models the historical "fixed seat threshold"
/// scenario, not a redistribution.
pub fn change_pop_of_state(
    house: &mut House,
    st: St,
    pop_change_millions: f64,
) -> Result<(), ShiftError> {
    let pop = house.states[&st].pop;
    if pop + pop_change_millions < 0.0 {
        return Err(ShiftError::MakesStatePopNegative {
            st,
            pop_millions: pop,
            delta_millions: pop_change_millions,
        });
    }
    house
        .states
        .get_mut(&st)
        .expect("closed jurisdiction set")
        .pop += pop_change_millions;
    debug!(st = %st, delta_millions = pop_change_millions, "changed a state's population in place");
    Ok(())
}
