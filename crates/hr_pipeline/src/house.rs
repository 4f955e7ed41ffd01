//! Building an apportioned, validated House.

use hr_algo::assign_house_seats_priority;
use hr_core::{
    census_year_for_congress, validate_electoral_total, validate_no_reps_matches_true,
    validate_total_pop_matches_true, House, PopType, TrueTable, Year,
};
use tracing::info;

use crate::error::PipelineError;

/// Build a House for `year`, run the priority apportionment, and check the
/// result against the certified reference counts. Any disagreement with the
/// historical record is an error, not a warning.
///
/// The certified counts were computed from the apportionment population;
/// other population types skip the seat comparison (a resident-only run can
/// legitimately differ, as it did in 1970).
pub fn apportioned_house_for_year(
    table: &TrueTable,
    year: Year,
    pop_type: PopType,
) -> Result<House, PipelineError> {
    let mut house = House::new(table, year, pop_type)?;
    assign_house_seats_priority(&mut house)?;
    validate_total_pop_matches_true(&house, table)?;
    validate_electoral_total(&house)?;
    if pop_type == PopType::Apportionment {
        validate_no_reps_matches_true(&house, table, year)?;
        info!(%year, "apportioned house matches the certified counts");
    }
    Ok(house)
}

/// Same, resolving the census year from a congress number.
pub fn apportioned_house_for_congress(
    table: &TrueTable,
    congress: u32,
    pop_type: PopType,
) -> Result<(Year, House), PipelineError> {
    let year = census_year_for_congress(congress)?;
    let house = apportioned_house_for_year(table, year, pop_type)?;
    Ok((year, house))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::CoreError;

    #[test]
    fn every_census_year_reproduces_the_certified_seats() {
        let table = hr_io::load_states_true().unwrap();
        for year in Year::ALL {
            let house = apportioned_house_for_year(&table, year, PopType::Apportionment).unwrap();
            assert_eq!(house.total_voting_seats(), 435, "{year}");
        }
    }

    #[test]
    fn congress_resolution() {
        let table = hr_io::load_states_true().unwrap();
        let (year, _) =
            apportioned_house_for_congress(&table, 118, PopType::Apportionment).unwrap();
        assert_eq!(year, Year::Y2020);
        assert!(matches!(
            apportioned_house_for_congress(&table, 87, PopType::Apportionment),
            Err(PipelineError::Core(CoreError::UnknownCongress(87)))
        ));
    }
}
