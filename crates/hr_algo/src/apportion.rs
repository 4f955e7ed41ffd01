//! Seat assignment: Huntington-Hill priority method, the continuous
//! ("fair share") baseline, and the divisor-rounding variant.
//!
//! Contract:
//! - Every non-DC jurisdiction gets a mandatory minimum of 1 voting seat; DC
//!   is pinned to 0 voting / 1 nonvoting.
//! - The remaining `N − 50` seats are awarded one at a time to the state with
//!   the maximum priority `pop / sqrt(n(n+1))`.
//! - Ties in priority (numerically unreachable with real census data) resolve
//!   to the earliest state in `St` order: the scan compares with strict `>`.
//!
//! Determinism: scans iterate the `states` map in `St` order; there is no
//! randomness anywhere in this crate.

use std::collections::BTreeMap;

use core::fmt;

use hr_core::{harmonic_mean, House, St};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApportionError {
    /// Fewer seats than voting-eligible states: the mandatory minimum cannot
    /// be satisfied.
    TooFewSeats { seats: u32 },
    /// The divisor-rounding variant failed to converge on 435 within its
    /// bounded number of divisor adjustments.
    DivisorNoConvergence { tries: u32 },
}

impl fmt::Display for ApportionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApportionError::TooFewSeats { seats } => {
                write!(f, "cannot assign {seats} voting seats to 50 states (minimum is 50)")
            }
            ApportionError::DivisorNoConvergence { tries } => {
                write!(f, "divisor method did not converge after {tries} adjustments")
            }
        }
    }
}

impl std::error::Error for ApportionError {}

/// One award step of the priority method: seat number → winner.
#[derive(Clone, Debug)]
pub struct PriorityAward {
    pub st: St,
    pub priority: f64,
    /// Full priority ranking (descending) at this step, when requested.
    pub ranked: Option<Vec<(St, f64)>>,
}

/// Per-seat award log for seats 51..=N.
pub type PriorityLog = BTreeMap<u32, PriorityAward>;

/// Assign voting seats by the Huntington-Hill priority method.
///
/// Mutates `house.states[*].no_reps` so that voting seats sum to exactly
/// `house.no_voting_house_seats`, every non-DC state holds ≥ 1, and DC holds
/// 0 voting / 1 nonvoting. Exactly `N − 50` award iterations.
pub fn assign_house_seats_priority(house: &mut House) -> Result<(), ApportionError> {
    assign_priority_inner(house, false).map(|_| ())
}

/// Same as [`assign_house_seats_priority`], additionally recording each award
/// step (winner, priority, full ranking) for diagnostics.
pub fn assign_house_seats_priority_logged(house: &mut House) -> Result<PriorityLog, ApportionError> {
    assign_priority_inner(house, true)
}

fn assign_priority_inner(house: &mut House, log_ranked: bool) -> Result<PriorityLog, ApportionError> {
    let target = house.no_voting_house_seats;
    if target < 50 {
        return Err(ApportionError::TooFewSeats { seats: target });
    }

    // Mandatory minimum: 1 voting seat each, DC pinned to its delegate.
    let mut assigned: u32 = 0;
    for state in house.states.values_mut() {
        if state.st.is_dc() {
            state.no_reps.voting = 0;
            state.no_reps.nonvoting = 1;
        } else {
            state.no_reps.voting = 1;
            state.no_reps.nonvoting = 0;
            assigned += 1;
        }
    }

    // Current priorities; only the winner's entry changes per round.
    let mut priorities: BTreeMap<St, f64> = house
        .states
        .values()
        .filter(|s| !s.st.is_dc())
        .map(|s| (s.st, s.priority()))
        .collect();

    let mut log = PriorityLog::new();
    while assigned < target {
        let (&winner, &priority) = priorities
            .iter()
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
            .expect("50 voting-eligible states");

        let state = house
            .states
            .get_mut(&winner)
            .expect("winner is present in the house");
        state.no_reps.voting += 1;
        assigned += 1;

        let ranked = log_ranked.then(|| {
            let mut all: Vec<(St, f64)> = priorities.iter().map(|(&st, &p)| (st, p)).collect();
            all.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(core::cmp::Ordering::Equal));
            all
        });
        log.insert(assigned, PriorityAward { st: winner, priority, ranked });

        priorities.insert(winner, state.priority());
    }

    debug_assert_eq!(house.total_voting_seats(), target);
    Ok(log)
}

/// Continuous "fair share" baseline: each voting-eligible state's real-valued
/// seat count `pop_frac_excl_DC × N`. Does not touch the integer assignment.
pub fn fractional_shares(house: &House) -> BTreeMap<St, f64> {
    let total = house.total_pop_excluding(&[St::DistrictOfColumbia]);
    let seats = f64::from(house.no_voting_house_seats);
    house
        .states
        .values()
        .filter(|s| !s.st.is_dc())
        .map(|s| (s.st, s.pop / total * seats))
        .collect()
}

/// Divisor-rounding variant: round each state's `pop / ideal` at the harmonic
/// mean of the bracketing integers, nudging the ideal district size until the
/// total lands on `N`. Secondary method, kept for cross-checking the priority
/// assignment.
pub fn assign_house_seats_divisor(house: &mut House) -> Result<(), ApportionError> {
    const MAX_TRIES: u32 = 100;

    let target = house.no_voting_house_seats;
    if target < 50 {
        return Err(ApportionError::TooFewSeats { seats: target });
    }

    let mut ideal =
        house.total_pop_excluding(&[St::DistrictOfColumbia]) / f64::from(target);

    for _ in 0..MAX_TRIES {
        for state in house.states.values_mut() {
            if state.st.is_dc() {
                state.no_reps.voting = 0;
                state.no_reps.nonvoting = 1;
                continue;
            }
            state.no_reps.nonvoting = 0;

            let ideal_no = state.pop / ideal;
            if ideal_no < 1.0 {
                state.no_reps.voting = 1;
                continue;
            }
            let lower = ideal_no.floor();
            let upper = lower + 1.0;
            state.no_reps.voting = if ideal_no < harmonic_mean(lower, upper) {
                lower as u32
            } else {
                upper as u32
            };
        }

        let total = house.total_voting_seats();
        if total == target {
            return Ok(());
        }
        // Overshoot → larger districts; undershoot → smaller.
        if total > target {
            ideal *= 1.0001;
        } else {
            ideal *= 0.9999;
        }
    }

    Err(ApportionError::DivisorNoConvergence { tries: MAX_TRIES })
}
