//! The compiled-in census/apportionment reference table.
//!
//! One row per (state, census year): resident and overseas population in
//! whole people, the apportionment population actually used, and the seat
//! counts the Census Bureau certified. Populations are exposed downstream in
//! millions. For 1960 and 1980 the overseas column is zero and the
//! apportionment population equals the resident population; those censuses
//! did not count the overseas military.

use std::collections::BTreeMap;

use hr_core::{NoReps, Pop, St, StateTrue, TrueTable, Year};
use serde::Deserialize;

use crate::error::IoError;

static APPORTIONMENT_CSV: &str = include_str!("../data/apportionment.csv");

#[derive(Debug, Deserialize)]
struct ReferenceRow {
    st: String,
    year: String,
    resident: u64,
    overseas: u64,
    apportionment: u64,
    reps_voting: u32,
    reps_nonvoting: u32,
}

/// Build the reference table from the embedded data: 51 jurisdictions, each
/// covering all 7 census years.
pub fn load_states_true() -> Result<TrueTable, IoError> {
    let mut table = TrueTable::new();
    let mut reader = csv::Reader::from_reader(APPORTIONMENT_CSV.as_bytes());
    for record in reader.deserialize() {
        let row: ReferenceRow =
            record.map_err(|source| IoError::EmbeddedReference { source })?;
        let st = St::from_code(&row.st)?;
        let year = Year::from_label(&row.year)?;

        let entry = table.entry(st).or_insert_with(|| StateTrue {
            st,
            year_to_pop: BTreeMap::new(),
            year_to_no_reps: BTreeMap::new(),
        });
        entry.year_to_pop.insert(
            year,
            Pop {
                resident: row.resident as f64 / 1e6,
                overseas: row.overseas as f64 / 1e6,
                apportionment: row.apportionment as f64 / 1e6,
            },
        );
        entry.year_to_no_reps.insert(
            year,
            NoReps { voting: row.reps_voting, nonvoting: row.reps_nonvoting },
        );
    }

    for st in St::ALL {
        let Some(state) = table.get(&st) else {
            return Err(IoError::EmbeddedIncomplete(format!("missing state {st}")));
        };
        for year in Year::ALL {
            if !state.year_to_pop.contains_key(&year) {
                return Err(IoError::EmbeddedIncomplete(format!("missing {st} {year}")));
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::VOTING_HOUSE_SEATS;

    #[test]
    fn table_is_complete() {
        let table = load_states_true().unwrap();
        assert_eq!(table.len(), 51);
        for state in table.values() {
            assert_eq!(state.year_to_pop.len(), 7);
            assert_eq!(state.year_to_no_reps.len(), 7);
        }
    }

    #[test]
    fn certified_seats_sum_to_435_every_year() {
        let table = load_states_true().unwrap();
        for year in Year::ALL {
            let voting: u32 = table
                .values()
                .map(|s| s.year_to_no_reps[&year].voting)
                .sum();
            assert_eq!(voting, VOTING_HOUSE_SEATS, "{year}");
            assert_eq!(table[&St::DistrictOfColumbia].year_to_no_reps[&year].voting, 0);
            assert_eq!(table[&St::DistrictOfColumbia].year_to_no_reps[&year].nonvoting, 1);
        }
    }

    #[test]
    fn populations_are_plausible_and_consistent() {
        let table = load_states_true().unwrap();
        for state in table.values() {
            for year in Year::ALL {
                let pop = &state.year_to_pop[&year];
                assert!(pop.resident > 0.0);
                assert!(pop.overseas >= 0.0);
                // apportionment = resident + overseas, to the person
                assert!((pop.apportionment - pop.resident - pop.overseas).abs() < 1e-9);
            }
        }
        // spot checks against the published counts
        let ca2020 = &table[&St::California].year_to_pop[&Year::Y2020];
        assert!((ca2020.apportionment - 39.576757).abs() < 1e-9);
        let wy1960 = &table[&St::Wyoming].year_to_pop[&Year::Y1960];
        assert!((wy1960.resident - 0.330066).abs() < 1e-9);
        assert_eq!(wy1960.overseas, 0.0);
    }
}
