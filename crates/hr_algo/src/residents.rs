//! Residents represented per voting seat, state by state.

use std::collections::BTreeMap;

use hr_core::{CoreError, PopType, St, TrueTable, Year, VOTING_HOUSE_SEATS};

use crate::error::AlgoError;

/// Residents per voting representative for one census year.
#[derive(Clone, Debug)]
pub struct ResidentsPerRep {
    pub year: Year,
    /// People per voting seat for each of the 50 states.
    pub st_to_residents_per_rep: BTreeMap<St, f64>,
    /// The nationwide ideal: total population (excluding DC) over 435.
    pub fair: f64,
}

/// Compute residents-per-representative from the reference table, using the
/// apportionment population and the historical seat counts.
pub fn calculate_residents_per_rep_for_year(
    table: &TrueTable,
    year: Year,
) -> Result<ResidentsPerRep, AlgoError> {
    let mut st_to_residents_per_rep = BTreeMap::new();
    let mut total_pop = 0.0;
    for st in St::all_except_dc() {
        let state = table.get(&st).ok_or(CoreError::MissingState(st))?;
        let pop = state
            .year_to_pop
            .get(&year)
            .ok_or(CoreError::MissingYear { st, year })?
            .get(PopType::Apportionment);
        let voting = state
            .year_to_no_reps
            .get(&year)
            .ok_or(CoreError::MissingYear { st, year })?
            .voting;
        total_pop += pop;
        st_to_residents_per_rep.insert(st, pop * 1e6 / f64::from(voting));
    }
    let fair = total_pop * 1e6 / f64::from(VOTING_HOUSE_SEATS);
    Ok(ResidentsPerRep { year, st_to_residents_per_rep, fair })
}
