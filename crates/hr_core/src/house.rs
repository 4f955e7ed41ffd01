//! The mutable House aggregate: all 51 working records for one census year.
//!
//! One `House` per logical computation. Callers that need a result to survive
//! further mutation take an explicit snapshot (`Clone`); there is no hidden
//! sharing.

use std::collections::BTreeMap;

use crate::entities::{StateWorking, TrueTable};
use crate::errors::CoreError;
use crate::jurisdiction::St;
use crate::population::PopType;
use crate::year::Year;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of voting House seats since the Reapportionment Act of 1929.
pub const VOTING_HOUSE_SEATS: u32 = 435;

/// Total electoral-college votes (435 + 100 senators + 3 for DC).
pub const ELECTORAL_VOTES: u32 = 538;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct House {
    pub year: Year,
    pub pop_type: PopType,
    /// Voting seats to distribute; 435 unless a caller overrides it.
    pub no_voting_house_seats: u32,
    pub no_electoral_votes_true: u32,
    pub states: BTreeMap<St, StateWorking>,
}

impl House {
    /// Build a working House from the reference table, populating every
    /// jurisdiction with its true population for `year`.
    pub fn new(table: &TrueTable, year: Year, pop_type: PopType) -> Result<House, CoreError> {
        let mut states = BTreeMap::new();
        for st in St::ALL {
            let state_true = table.get(&st).ok_or(CoreError::MissingState(st))?;
            let pop = state_true
                .year_to_pop
                .get(&year)
                .ok_or(CoreError::MissingYear { st, year })?;
            states.insert(st, StateWorking::new(st, pop.get(pop_type)));
        }
        Ok(House {
            year,
            pop_type,
            no_voting_house_seats: VOTING_HOUSE_SEATS,
            no_electoral_votes_true: ELECTORAL_VOTES,
            states,
        })
    }

    /// Reset every working population to its true value (discards shifts).
    pub fn reset_pops_to_true(&mut self, table: &TrueTable) -> Result<(), CoreError> {
        for (st, state) in &mut self.states {
            let state_true = table.get(st).ok_or(CoreError::MissingState(*st))?;
            let pop = state_true
                .year_to_pop
                .get(&self.year)
                .ok_or(CoreError::MissingYear { st: *st, year: self.year })?;
            state.pop = pop.get(self.pop_type);
        }
        Ok(())
    }

    /// Total working population across all 51 jurisdictions, in millions.
    pub fn total_pop(&self) -> f64 {
        self.states.values().map(|s| s.pop).sum()
    }

    /// Total working population excluding the given jurisdictions.
    pub fn total_pop_excluding(&self, exclude: &[St]) -> f64 {
        self.states
            .values()
            .filter(|s| !exclude.contains(&s.st))
            .map(|s| s.pop)
            .sum()
    }

    /// Sum of assigned voting seats.
    pub fn total_voting_seats(&self) -> u32 {
        self.states.values().map(|s| s.no_reps.voting).sum()
    }

    /// Sum of electoral-college votes across all jurisdictions.
    pub fn total_electoral_votes(&self) -> u32 {
        self.states.values().map(|s| s.electoral_votes()).sum()
    }

    /// Fill in each state's electoral fraction and per-capita vote fraction.
    ///
    /// `electoral_frac = electoral_votes / total_electoral_votes`;
    /// `electoral_frac_vote = electoral_frac × (total_pop / state_pop)`.
    pub fn calculate_electoral_vote_fracs(&mut self) {
        let total_pop = self.total_pop();
        let total_votes = f64::from(self.total_electoral_votes());
        for state in self.states.values_mut() {
            state.electoral_frac = f64::from(state.electoral_votes()) / total_votes;
            state.electoral_frac_vote = state.electoral_frac * (total_pop / state.pop);
        }
    }
}
