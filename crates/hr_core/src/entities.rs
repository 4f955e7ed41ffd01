//! Reference-data rows and the mutable per-jurisdiction working record.

use std::collections::BTreeMap;

use crate::jurisdiction::St;
use crate::population::{geometric_mean, Pop};
use crate::year::Year;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seats held by a jurisdiction.
///
/// DC is pinned to voting=0 / nonvoting=1; every other jurisdiction has
/// nonvoting=0. Only the apportionment algorithms mutate this.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoReps {
    pub voting: u32,
    pub nonvoting: u32,
}

/// Immutable ground truth for one jurisdiction: population and seat counts
/// per census year. Years absent from the source table are simply absent here.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateTrue {
    pub st: St,
    pub year_to_pop: BTreeMap<Year, Pop>,
    pub year_to_no_reps: BTreeMap<Year, NoReps>,
}

/// The loaded reference table: one `StateTrue` per jurisdiction.
pub type TrueTable = BTreeMap<St, StateTrue>;

/// Mutable working record for one jurisdiction inside a `House`.
///
/// `pop` is in millions of people. Shift operators mutate it; apportionment
/// mutates `no_reps`; the electoral fractions are filled in on demand.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateWorking {
    pub st: St,
    pub pop: f64,
    pub no_reps: NoReps,
    pub electoral_frac: f64,
    pub electoral_frac_vote: f64,
}

impl StateWorking {
    pub fn new(st: St, pop: f64) -> Self {
        StateWorking {
            st,
            pop,
            no_reps: NoReps::default(),
            electoral_frac: 0.0,
            electoral_frac_vote: 0.0,
        }
    }

    /// Huntington-Hill priority: the marginal value of this state's next seat,
    /// `pop / sqrt(n(n+1))` for a state currently holding `n` voting seats.
    pub fn priority(&self) -> f64 {
        let n = f64::from(self.no_reps.voting);
        self.pop / geometric_mean(n, n + 1.0)
    }

    /// Electoral-college votes: house seats (voting + nonvoting) plus the two
    /// senate-equivalent votes.
    pub fn electoral_votes(&self) -> u32 {
        self.no_reps.voting + self.no_reps.nonvoting + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_pop_over_geometric_mean() {
        let mut state = StateWorking::new(St::Ohio, 10.0);
        state.no_reps.voting = 1;
        assert!((state.priority() - 10.0 / 2.0f64.sqrt()).abs() < 1e-12);
        state.no_reps.voting = 3;
        assert!((state.priority() - 10.0 / 12.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn electoral_votes_add_two_senators() {
        let mut state = StateWorking::new(St::Wyoming, 0.58);
        state.no_reps.voting = 1;
        assert_eq!(state.electoral_votes(), 3);
        let mut dc = StateWorking::new(St::DistrictOfColumbia, 0.69);
        dc.no_reps.nonvoting = 1;
        assert_eq!(dc.electoral_votes(), 3);
    }
}
