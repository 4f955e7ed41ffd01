//! Congress-level fractional-vote analysis.
//!
//! For every roll-call in a congress: verify the computed tally against the
//! published counts, rescale, and report where the fractional tally moves
//! the needle. Rolls that fail the consistency check are skipped with a
//! warning rather than aborting the whole congress.

use hr_algo::{CalculateVotes, FractionalVoteResults, VoteOptions};
use hr_core::{Members, PopType, RollCallsAll, TrueTable, VotesAll, Year};
use tracing::{info, warn};

use crate::consistency::check_tally_consistency;
use crate::error::PipelineError;
use crate::house::apportioned_house_for_congress;

#[derive(Clone, Debug)]
pub struct RollAnalysis {
    pub rollnumber: u32,
    pub results: FractionalVoteResults,
    /// Fractional yea minus actual yea.
    pub yea_shift: f64,
    /// Unknown members were dropped during the consistency check.
    pub reconciled: bool,
}

#[derive(Clone, Debug)]
pub struct CongressAnalysis {
    pub congress: u32,
    pub year: Year,
    pub rolls: Vec<RollAnalysis>,
    /// Roll numbers whose majority decision flips under rescaling.
    pub flipped: Vec<u32>,
    /// Roll number with the largest absolute yea shift, if any roll survived.
    pub max_shift: Option<(u32, f64)>,
    /// Roll numbers dropped for failing the consistency check or lacking a
    /// published aggregate.
    pub skipped: Vec<u32>,
}

/// Analyze every roll-call of one congress under fractional voting.
pub fn analyze_congress(
    table: &TrueTable,
    congress: u32,
    votes: &VotesAll,
    rollcalls: &RollCallsAll,
    members: &Members,
    options: &VoteOptions,
) -> Result<CongressAnalysis, PipelineError> {
    let (year, house) = apportioned_house_for_congress(table, congress, PopType::Apportionment)?;

    let mut rolls = Vec::new();
    let mut flipped = Vec::new();
    let mut skipped = Vec::new();
    let mut max_shift: Option<(u32, f64)> = None;

    let congress_rolls = votes
        .congress_to_rollnumber_to_votes
        .get(&congress)
        .into_iter()
        .flatten();
    for (&rollnumber, rollvotes) in congress_rolls {
        let Some(rollcall) = rollcalls.get(congress, rollnumber) else {
            warn!(congress, rollnumber, "no published aggregate; skipping roll");
            skipped.push(rollnumber);
            continue;
        };
        let consistency =
            match check_tally_consistency(&house, members, rollvotes, rollcall, options) {
                Ok(c) => c,
                Err(PipelineError::TallyMismatch { .. }) => {
                    warn!(congress, rollnumber, "tally disagrees with published counts; skipping roll");
                    skipped.push(rollnumber);
                    continue;
                }
                Err(e) => return Err(e),
            };

        let calc = CalculateVotes::new(&house, members, rollvotes, options.clone());
        let results = calc.calculate_votes_both()?;
        let yea_shift = results.fractional.yea() - results.actual.yea();
        if results.flipped {
            flipped.push(rollnumber);
        }
        if max_shift.map_or(true, |(_, best)| yea_shift.abs() > best.abs()) {
            max_shift = Some((rollnumber, yea_shift));
        }
        rolls.push(RollAnalysis {
            rollnumber,
            results,
            yea_shift,
            reconciled: consistency.reconciled,
        });
    }

    info!(
        congress,
        rolls = rolls.len(),
        flips = flipped.len(),
        skipped = skipped.len(),
        "congress analyzed"
    );
    Ok(CongressAnalysis { congress, year, rolls, flipped, max_shift, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::{CastCode, RollCall, RollVotes, St};

    fn members(pairs: &[(u32, St)]) -> Members {
        Members { icpsr_to_state: pairs.iter().copied().collect() }
    }

    fn votes_with(rolls: &[(u32, &[(u32, CastCode)])]) -> VotesAll {
        let mut votes = VotesAll::default();
        for &(rollnumber, pairs) in rolls {
            votes.insert(RollVotes {
                congress: 118,
                rollnumber,
                icpsr_to_castcode: pairs.iter().copied().collect(),
            });
        }
        votes
    }

    fn rollcalls_with(counts: &[(u32, u32, u32)]) -> RollCallsAll {
        let mut rollcalls = RollCallsAll::default();
        for &(rollnumber, yea, nay) in counts {
            rollcalls.insert(RollCall {
                congress: 118,
                rollnumber,
                date: String::new(),
                yea_count: yea,
                nay_count: nay,
                bill_number: String::new(),
                vote_result: String::new(),
                vote_question: String::new(),
                vote_desc: String::new(),
            });
        }
        rollcalls
    }

    #[test]
    fn analyzes_consistent_rolls_and_skips_bad_ones() {
        let table = hr_io::load_states_true().unwrap();
        let members = members(&[(1, St::Texas), (2, St::Wyoming), (3, St::Ohio)]);
        let votes = votes_with(&[
            (1, &[(1, CastCode::Yea), (2, CastCode::Nay), (3, CastCode::Yea)]),
            (2, &[(1, CastCode::Yea), (2, CastCode::Yea)]),
            (3, &[(1, CastCode::Nay)]),
        ]);
        // Roll 2's published counts disagree on purpose; roll 3 has none.
        let rollcalls = rollcalls_with(&[(1, 2, 1), (2, 5, 5)]);

        let analysis = analyze_congress(
            &table,
            118,
            &votes,
            &rollcalls,
            &members,
            &VoteOptions::default(),
        )
        .unwrap();
        assert_eq!(analysis.year, Year::Y2020);
        assert_eq!(analysis.rolls.len(), 1);
        assert_eq!(analysis.rolls[0].rollnumber, 1);
        assert_eq!(analysis.skipped, vec![2, 3]);
        let (max_roll, _) = analysis.max_shift.unwrap();
        assert_eq!(max_roll, 1);
    }

    #[test]
    fn tied_roll_flips_when_the_yea_state_is_underrepresented() {
        let table = hr_io::load_states_true().unwrap();
        // Delaware's single seat represents ~990k people against a ~761k
        // ideal district, so its member's fractional weight exceeds 1;
        // Rhode Island's two seats cover ~549k each, weight below 1.
        let members = members(&[(1, St::Delaware), (2, St::RhodeIsland)]);
        let votes = votes_with(&[(1, &[(1, CastCode::Yea), (2, CastCode::Nay)])]);
        let rollcalls = rollcalls_with(&[(1, 1, 1)]);

        let analysis = analyze_congress(
            &table,
            118,
            &votes,
            &rollcalls,
            &members,
            &VoteOptions::default(),
        )
        .unwrap();
        assert_eq!(analysis.flipped, vec![1]);
    }
}
