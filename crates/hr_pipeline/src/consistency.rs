//! Cross-checking computed tallies against the published roll-call counts.

use hr_algo::{CalculateVotes, MissingMemberPolicy, VoteOptions, VoteResults};
use hr_algo::AlgoError;
use hr_core::{House, Members, RollCall, RollVotes};
use tracing::warn;

use crate::error::PipelineError;

/// Published counts are integers; the computed tally is float-valued only
/// through weighting, so the actual tally must match to well under one vote.
const TALLY_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug)]
pub struct TallyConsistency {
    pub congress: u32,
    pub rollnumber: u32,
    pub results: VoteResults,
    /// Unknown members had to be dropped to produce a tally. Happens when a
    /// roll references a member seated for a territory.
    pub reconciled: bool,
}

/// Recompute one roll-call's actual tally and require it to agree with the
/// published yea/nay counts.
///
/// A member the state table cannot resolve triggers one retry with unknown
/// members dropped; a count disagreement after that is a hard error.
pub fn check_tally_consistency(
    house: &House,
    members: &Members,
    rollvotes: &RollVotes,
    rollcall: &RollCall,
    options: &VoteOptions,
) -> Result<TallyConsistency, PipelineError> {
    let strict = VoteOptions {
        missing_members: MissingMemberPolicy::Fail,
        ..options.clone()
    };
    let calc = CalculateVotes::new(house, members, rollvotes, strict);
    let (results, reconciled) = match calc.calculate_votes() {
        Ok(results) => (results, false),
        Err(AlgoError::MissingMember { icpsr }) => {
            warn!(
                congress = rollvotes.congress,
                rollnumber = rollvotes.rollnumber,
                icpsr,
                "unknown member in roll; retrying with unknown members dropped"
            );
            let lenient = VoteOptions {
                missing_members: MissingMemberPolicy::Skip,
                ..options.clone()
            };
            let calc = CalculateVotes::new(house, members, rollvotes, lenient);
            (calc.calculate_votes()?, true)
        }
        Err(e) => return Err(e.into()),
    };

    let yea = results.yea();
    let nay = results.nay();
    if (yea - f64::from(rollcall.yea_count)).abs() > TALLY_TOLERANCE
        || (nay - f64::from(rollcall.nay_count)).abs() > TALLY_TOLERANCE
    {
        return Err(PipelineError::TallyMismatch {
            congress: rollvotes.congress,
            rollnumber: rollvotes.rollnumber,
            computed_yea: yea,
            computed_nay: nay,
            published_yea: rollcall.yea_count,
            published_nay: rollcall.nay_count,
        });
    }

    Ok(TallyConsistency {
        congress: rollvotes.congress,
        rollnumber: rollvotes.rollnumber,
        results,
        reconciled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_algo::assign_house_seats_priority;
    use hr_core::{CastCode, PopType, St, Year};

    fn apportioned_house() -> House {
        let table = hr_io::load_states_true().unwrap();
        let mut house = House::new(&table, Year::Y2020, PopType::Apportionment).unwrap();
        assign_house_seats_priority(&mut house).unwrap();
        house
    }

    fn rollcall(yea: u32, nay: u32) -> RollCall {
        RollCall {
            congress: 118,
            rollnumber: 1,
            date: "2023-01-09".into(),
            yea_count: yea,
            nay_count: nay,
            bill_number: String::new(),
            vote_result: String::new(),
            vote_question: String::new(),
            vote_desc: String::new(),
        }
    }

    fn members(pairs: &[(u32, St)]) -> Members {
        Members { icpsr_to_state: pairs.iter().copied().collect() }
    }

    fn roll(pairs: &[(u32, CastCode)]) -> RollVotes {
        RollVotes {
            congress: 118,
            rollnumber: 1,
            icpsr_to_castcode: pairs.iter().copied().collect(),
        }
    }

    #[test]
    fn matching_counts_pass() {
        let house = apportioned_house();
        let members = members(&[(1, St::Texas), (2, St::Ohio), (3, St::Maine)]);
        let rollvotes =
            roll(&[(1, CastCode::Yea), (2, CastCode::Yea), (3, CastCode::Nay)]);
        let out = check_tally_consistency(
            &house,
            &members,
            &rollvotes,
            &rollcall(2, 1),
            &VoteOptions::default(),
        )
        .unwrap();
        assert!(!out.reconciled);
    }

    #[test]
    fn unknown_member_reconciles_once() {
        let house = apportioned_house();
        let members = members(&[(1, St::Texas)]);
        // icpsr 999 has no state; published counts already exclude it.
        let rollvotes = roll(&[(1, CastCode::Yea), (999, CastCode::Nay)]);
        let out = check_tally_consistency(
            &house,
            &members,
            &rollvotes,
            &rollcall(1, 0),
            &VoteOptions::default(),
        )
        .unwrap();
        assert!(out.reconciled);
    }

    #[test]
    fn count_disagreement_is_fatal() {
        let house = apportioned_house();
        let members = members(&[(1, St::Texas)]);
        let rollvotes = roll(&[(1, CastCode::Yea)]);
        let err = check_tally_consistency(
            &house,
            &members,
            &rollvotes,
            &rollcall(2, 0),
            &VoteOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::TallyMismatch { .. }));
    }
}
