//! Consistency checks between a working House and the reference table.

use core::fmt;

use crate::entities::TrueTable;
use crate::house::House;
use crate::jurisdiction::St;
use crate::year::Year;

/// Tolerance for floating-point population totals, in millions.
pub const POP_TOLERANCE_MILLIONS: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// Assigned total population drifted from the true total.
    TotalPopMismatch { assigned: f64, expected: f64 },
    /// One or more states' assigned seats disagree with the reference counts.
    RepsMismatch(Vec<RepsMismatch>),
    /// Electoral-college total is not 538.
    ElectoralTotalMismatch { assigned: u32, expected: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepsMismatch {
    pub st: St,
    pub year: Year,
    pub voting_assigned: u32,
    pub voting_true: u32,
    pub nonvoting_assigned: u32,
    pub nonvoting_true: u32,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TotalPopMismatch { assigned, expected } => write!(
                f,
                "total assigned population {assigned:.6}M does not match true total {expected:.6}M"
            ),
            ValidationError::RepsMismatch(mismatches) => {
                write!(f, "seat counts disagree with reference for {} state(s):", mismatches.len())?;
                for m in mismatches {
                    write!(
                        f,
                        " [{} {}: voting {} != {}, nonvoting {} != {}]",
                        m.st, m.year, m.voting_assigned, m.voting_true,
                        m.nonvoting_assigned, m.nonvoting_true
                    )?;
                }
                Ok(())
            }
            ValidationError::ElectoralTotalMismatch { assigned, expected } => {
                write!(f, "electoral college total {assigned} does not match {expected}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that the working total population still matches the true total for
/// the House's year and population type, within `POP_TOLERANCE_MILLIONS`.
pub fn validate_total_pop_matches_true(
    house: &House,
    table: &TrueTable,
) -> Result<(), ValidationError> {
    let assigned = house.total_pop();
    let expected: f64 = St::ALL
        .iter()
        .filter_map(|st| table.get(st))
        .filter_map(|state| state.year_to_pop.get(&house.year))
        .map(|pop| pop.get(house.pop_type))
        .sum();
    if (assigned - expected).abs() < POP_TOLERANCE_MILLIONS {
        Ok(())
    } else {
        Err(ValidationError::TotalPopMismatch { assigned, expected })
    }
}

/// Check every state's assigned seats against the reference counts for `year`,
/// collecting all mismatches before failing.
pub fn validate_no_reps_matches_true(
    house: &House,
    table: &TrueTable,
    year: Year,
) -> Result<(), ValidationError> {
    let mut mismatches = Vec::new();
    for state in house.states.values() {
        let Some(true_reps) = table
            .get(&state.st)
            .and_then(|s| s.year_to_no_reps.get(&year))
        else {
            continue; // year not covered for this state: skipped, not an error
        };
        if state.no_reps.voting != true_reps.voting
            || state.no_reps.nonvoting != true_reps.nonvoting
        {
            mismatches.push(RepsMismatch {
                st: state.st,
                year,
                voting_assigned: state.no_reps.voting,
                voting_true: true_reps.voting,
                nonvoting_assigned: state.no_reps.nonvoting,
                nonvoting_true: true_reps.nonvoting,
            });
        }
    }
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::RepsMismatch(mismatches))
    }
}

/// Check the electoral-college total against the House's expected 538.
pub fn validate_electoral_total(house: &House) -> Result<(), ValidationError> {
    let assigned = house.total_electoral_votes();
    if assigned == house.no_electoral_votes_true {
        Ok(())
    } else {
        Err(ValidationError::ElectoralTotalMismatch {
            assigned,
            expected: house.no_electoral_votes_true,
        })
    }
}
