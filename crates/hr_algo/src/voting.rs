//! Roll-call tallies, actual and fractional.
//!
//! The fractional tally answers "what if every state's voting power matched
//! its population share exactly": each member's vote is rescaled by
//! `fair_seats(state) / actual_seats(state)`, where `fair_seats` is the
//! continuous share from [`crate::apportion::fractional_shares`]. DC members
//! keep weight 1.0, since the delegate's floor vote is symbolic either way.

use std::collections::BTreeMap;

use hr_core::{CastCode, House, Members, RollVotes, St};
use tracing::debug;

use crate::apportion::{assign_house_seats_priority, fractional_shares};
use crate::error::AlgoError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MajorityDecision {
    Pass,
    Fail,
}

/// What to do when a roll-call references a member with no state on record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MissingMemberPolicy {
    Fail,
    Skip,
}

#[derive(Clone, Debug)]
pub struct VoteOptions {
    /// Re-apportion the House at a seat total equal to the number of counted
    /// votes and rescale against that assignment. Matters for rolls with
    /// many absences.
    pub use_num_votes_as_num_seats: bool,
    /// Cast codes dropped before tallying.
    pub skip_castcodes: Vec<CastCode>,
    /// Drop DC's delegate entirely instead of counting it at weight 1.0.
    pub skip_dc: bool,
    pub missing_members: MissingMemberPolicy,
}

impl Default for VoteOptions {
    fn default() -> VoteOptions {
        VoteOptions {
            use_num_votes_as_num_seats: false,
            skip_castcodes: vec![CastCode::NotMember, CastCode::NotVoting],
            skip_dc: false,
            missing_members: MissingMemberPolicy::Fail,
        }
    }
}

/// Tally of one roll-call. `castcode_votes` holds (possibly weighted) vote
/// mass per cast code.
#[derive(Clone, Debug)]
pub struct VoteResults {
    pub congress: u32,
    pub rollnumber: u32,
    pub castcode_votes: BTreeMap<CastCode, f64>,
    pub majority_decision: MajorityDecision,
}

impl VoteResults {
    pub fn yea(&self) -> f64 {
        self.mass(&[CastCode::Yea, CastCode::PairedYea, CastCode::AnnouncedYea])
    }

    pub fn nay(&self) -> f64 {
        self.mass(&[CastCode::Nay, CastCode::PairedNay, CastCode::AnnouncedNay])
    }

    fn mass(&self, codes: &[CastCode]) -> f64 {
        codes
            .iter()
            .filter_map(|cc| self.castcode_votes.get(cc))
            .sum()
    }
}

/// Actual and rescaled tallies side by side.
#[derive(Clone, Debug)]
pub struct FractionalVoteResults {
    pub actual: VoteResults,
    pub fractional: VoteResults,
    /// The rescaling changed the majority decision.
    pub flipped: bool,
}

/// One roll-call's tally context: an apportioned House, the member→state
/// table, and the votes themselves.
pub struct CalculateVotes<'a> {
    house: &'a House,
    members: &'a Members,
    rollvotes: &'a RollVotes,
    options: VoteOptions,
}

impl<'a> CalculateVotes<'a> {
    /// `house` must already carry an apportionment (every state ≥ 1 voting
    /// seat); the rescaling divides by the assigned counts.
    pub fn new(
        house: &'a House,
        members: &'a Members,
        rollvotes: &'a RollVotes,
        options: VoteOptions,
    ) -> CalculateVotes<'a> {
        CalculateVotes { house, members, rollvotes, options }
    }

    /// Unweighted tally: every counted member contributes 1.0.
    pub fn calculate_votes(&self) -> Result<VoteResults, AlgoError> {
        let counted = self.counted_votes()?;
        Ok(self.tally(&counted, None))
    }

    /// Rescaled tally: each member contributes fair/actual for their state.
    ///
    /// With `use_num_votes_as_num_seats` set, the House is re-apportioned at a
    /// seat total equal to the number of counted votes, and both the fair
    /// share and the actual seat count come from that smaller House. A roll
    /// with fewer counted votes than states cannot seat the mandatory minimum
    /// and fails with [`crate::apportion::ApportionError::TooFewSeats`].
    pub fn calculate_votes_fractional(&self) -> Result<VoteResults, AlgoError> {
        let counted = self.counted_votes()?;
        let weights = if self.options.use_num_votes_as_num_seats {
            let mut sized = self.house.clone();
            sized.no_voting_house_seats = counted.len() as u32;
            assign_house_seats_priority(&mut sized)?;
            Self::weights_for(&sized)
        } else {
            Self::weights_for(self.house)
        };
        Ok(self.tally(&counted, Some(&weights)))
    }

    /// Per-state weight fair/actual for the given apportioned House, with DC
    /// pinned at 1.0.
    fn weights_for(house: &House) -> BTreeMap<St, f64> {
        let mut weights: BTreeMap<St, f64> = fractional_shares(house)
            .into_iter()
            .map(|(st, fair)| {
                let actual = f64::from(house.states[&st].no_reps.voting);
                (st, fair / actual)
            })
            .collect();
        weights.insert(St::DistrictOfColumbia, 1.0);
        weights
    }

    /// Both tallies plus the flip flag.
    pub fn calculate_votes_both(&self) -> Result<FractionalVoteResults, AlgoError> {
        let actual = self.calculate_votes()?;
        let fractional = self.calculate_votes_fractional()?;
        let flipped = actual.majority_decision != fractional.majority_decision;
        if flipped {
            debug!(
                congress = self.rollvotes.congress,
                rollnumber = self.rollvotes.rollnumber,
                "majority decision flips under fractional voting"
            );
        }
        Ok(FractionalVoteResults { actual, fractional, flipped })
    }

    /// Resolve every vote to a state, applying the skip rules and the
    /// missing-member policy.
    fn counted_votes(&self) -> Result<Vec<(St, CastCode)>, AlgoError> {
        let mut counted = Vec::with_capacity(self.rollvotes.icpsr_to_castcode.len());
        for (&icpsr, &castcode) in &self.rollvotes.icpsr_to_castcode {
            if self.options.skip_castcodes.contains(&castcode) {
                continue;
            }
            let Some(&st) = self.members.icpsr_to_state.get(&icpsr) else {
                match self.options.missing_members {
                    MissingMemberPolicy::Fail => return Err(AlgoError::MissingMember { icpsr }),
                    MissingMemberPolicy::Skip => continue,
                }
            };
            if st.is_dc() && self.options.skip_dc {
                continue;
            }
            counted.push((st, castcode));
        }
        Ok(counted)
    }

    fn tally(&self, counted: &[(St, CastCode)], weights: Option<&BTreeMap<St, f64>>) -> VoteResults {
        let mut castcode_votes: BTreeMap<CastCode, f64> = BTreeMap::new();
        for &(st, castcode) in counted {
            let weight = weights.map_or(1.0, |w| w[&st]);
            *castcode_votes.entry(castcode).or_insert(0.0) += weight;
        }
        let mut results = VoteResults {
            congress: self.rollvotes.congress,
            rollnumber: self.rollvotes.rollnumber,
            castcode_votes,
            majority_decision: MajorityDecision::Fail,
        };
        results.majority_decision = if results.yea() > results.nay() {
            MajorityDecision::Pass
        } else {
            MajorityDecision::Fail
        };
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apportion::{assign_house_seats_priority, ApportionError};
    use hr_core::{NoReps, Pop, PopType, StateTrue, TrueTable, Year};

    fn table() -> TrueTable {
        let mut table = TrueTable::new();
        for (i, st) in St::ALL.iter().enumerate() {
            let pop = if st.is_dc() { 0.7 } else { 1.0 + (51 - i) as f64 };
            let mut year_to_pop = BTreeMap::new();
            year_to_pop.insert(
                Year::Y2020,
                Pop { resident: pop, overseas: 0.0, apportionment: pop },
            );
            let mut year_to_no_reps = BTreeMap::new();
            year_to_no_reps.insert(Year::Y2020, NoReps::default());
            table.insert(*st, StateTrue { st: *st, year_to_pop, year_to_no_reps });
        }
        table
    }

    fn apportioned_house() -> House {
        let mut house = House::new(&table(), Year::Y2020, PopType::Apportionment).unwrap();
        assign_house_seats_priority(&mut house).unwrap();
        house
    }

    fn members(pairs: &[(u32, St)]) -> Members {
        Members { icpsr_to_state: pairs.iter().copied().collect() }
    }

    fn roll(pairs: &[(u32, CastCode)]) -> RollVotes {
        RollVotes {
            congress: 118,
            rollnumber: 5,
            icpsr_to_castcode: pairs.iter().copied().collect(),
        }
    }

    #[test]
    fn plain_tally_applies_skip_codes() {
        let house = apportioned_house();
        let members = members(&[
            (1, St::Texas),
            (2, St::Ohio),
            (3, St::Maine),
            (4, St::Utah),
        ]);
        let rollvotes = roll(&[
            (1, CastCode::Yea),
            (2, CastCode::Yea),
            (3, CastCode::Nay),
            (4, CastCode::NotVoting),
        ]);
        let calc = CalculateVotes::new(&house, &members, &rollvotes, VoteOptions::default());
        let results = calc.calculate_votes().unwrap();
        assert!((results.yea() - 2.0).abs() < 1e-12);
        assert!((results.nay() - 1.0).abs() < 1e-12);
        assert!(!results.castcode_votes.contains_key(&CastCode::NotVoting));
        assert_eq!(results.majority_decision, MajorityDecision::Pass);
    }

    #[test]
    fn missing_member_policy() {
        let house = apportioned_house();
        let members = members(&[(1, St::Texas)]);
        let rollvotes = roll(&[(1, CastCode::Yea), (999, CastCode::Nay)]);

        let fail = CalculateVotes::new(&house, &members, &rollvotes, VoteOptions::default());
        assert_eq!(
            fail.calculate_votes().unwrap_err(),
            AlgoError::MissingMember { icpsr: 999 }
        );

        let skip = CalculateVotes::new(
            &house,
            &members,
            &rollvotes,
            VoteOptions { missing_members: MissingMemberPolicy::Skip, ..Default::default() },
        );
        let results = skip.calculate_votes().unwrap();
        assert!((results.yea() - 1.0).abs() < 1e-12);
        assert!((results.nay() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn fractional_weight_is_fair_over_actual() {
        let house = apportioned_house();
        let shares = fractional_shares(&house);
        let st = St::Georgia;
        let expected = shares[&st] / f64::from(house.states[&st].no_reps.voting);

        let members = members(&[(1, st)]);
        let rollvotes = roll(&[(1, CastCode::Yea)]);
        let calc = CalculateVotes::new(&house, &members, &rollvotes, VoteOptions::default());
        let results = calc.calculate_votes_fractional().unwrap();
        assert!((results.yea() - expected).abs() < 1e-12);
    }

    #[test]
    fn dc_counts_at_unit_weight_unless_skipped() {
        let house = apportioned_house();
        let members = members(&[(1, St::DistrictOfColumbia)]);
        let rollvotes = roll(&[(1, CastCode::Yea)]);

        let counted =
            CalculateVotes::new(&house, &members, &rollvotes, VoteOptions::default());
        let results = counted.calculate_votes_fractional().unwrap();
        assert!((results.yea() - 1.0).abs() < 1e-12);

        let skipped = CalculateVotes::new(
            &house,
            &members,
            &rollvotes,
            VoteOptions { skip_dc: true, ..Default::default() },
        );
        let results = skipped.calculate_votes_fractional().unwrap();
        assert!((results.yea() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn rescaling_can_flip_a_tied_roll() {
        let house = apportioned_house();
        let shares = fractional_shares(&house);

        // Pick the most under- and over-represented states.
        let weight = |st: St| shares[&st] / f64::from(house.states[&st].no_reps.voting);
        let mut high = St::California;
        let mut low = St::California;
        for st in St::all_except_dc() {
            if weight(st) > weight(high) {
                high = st;
            }
            if weight(st) < weight(low) {
                low = st;
            }
        }
        assert!(weight(high) > weight(low));

        let members = members(&[(1, high), (2, low)]);
        let rollvotes = roll(&[(1, CastCode::Yea), (2, CastCode::Nay)]);
        let calc = CalculateVotes::new(&house, &members, &rollvotes, VoteOptions::default());
        let both = calc.calculate_votes_both().unwrap();
        // 1-1 tie fails on the actual tally; the heavier yea passes it.
        assert_eq!(both.actual.majority_decision, MajorityDecision::Fail);
        assert_eq!(both.fractional.majority_decision, MajorityDecision::Pass);
        assert!(both.flipped);
    }

    #[test]
    fn vote_sized_house_reapportions_at_the_counted_total() {
        let house = apportioned_house();

        // One member per state, so the roll counts exactly 50 votes. At a
        // 50-seat House the mandatory minimum is the whole assignment: every
        // state holds 1 seat, and each weight is the state's share of 50.
        let pairs: Vec<(u32, St)> = St::all_except_dc()
            .enumerate()
            .map(|(i, st)| (i as u32 + 1, st))
            .collect();
        let members = Members { icpsr_to_state: pairs.iter().copied().collect() };
        let votes: Vec<(u32, CastCode)> = pairs
            .iter()
            .map(|&(icpsr, st)| {
                let cc = if st == St::California { CastCode::Yea } else { CastCode::Nay };
                (icpsr, cc)
            })
            .collect();
        let rollvotes = roll(&votes);

        let calc = CalculateVotes::new(
            &house,
            &members,
            &rollvotes,
            VoteOptions { use_num_votes_as_num_seats: true, ..Default::default() },
        );
        let results = calc.calculate_votes_fractional().unwrap();

        let total: f64 = St::all_except_dc()
            .map(|st| house.states[&st].pop)
            .sum();
        let ca_share_of_50 = house.states[&St::California].pop / total * 50.0;
        assert!((results.yea() - ca_share_of_50).abs() < 1e-9);
        assert!((results.yea() + results.nay() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn vote_sized_house_needs_one_vote_per_state() {
        let house = apportioned_house();
        let members = members(&[(1, St::Texas), (2, St::Ohio)]);
        let rollvotes = roll(&[(1, CastCode::Yea), (2, CastCode::Nay)]);
        let calc = CalculateVotes::new(
            &house,
            &members,
            &rollvotes,
            VoteOptions { use_num_votes_as_num_seats: true, ..Default::default() },
        );
        assert_eq!(
            calc.calculate_votes_fractional().unwrap_err(),
            AlgoError::Apportion(ApportionError::TooFewSeats { seats: 2 })
        );
    }
}
