//! Roll-call input entities: cast codes, per-roll vote maps, published
//! roll-call aggregates, and the member→state table.
//!
//! These are read-only inputs to the vote calculator; the loading layer fills
//! them in and the core never does I/O on them.

use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::jurisdiction::St;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recorded vote value for one member on one roll-call (VoteView codes 0–9).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastCode {
    NotMember,
    Yea,
    PairedYea,
    AnnouncedYea,
    AnnouncedNay,
    PairedNay,
    Nay,
    Present,
    PresentAlt,
    NotVoting,
}

impl CastCode {
    pub const ALL: [CastCode; 10] = [
        CastCode::NotMember,
        CastCode::Yea,
        CastCode::PairedYea,
        CastCode::AnnouncedYea,
        CastCode::AnnouncedNay,
        CastCode::PairedNay,
        CastCode::Nay,
        CastCode::Present,
        CastCode::PresentAlt,
        CastCode::NotVoting,
    ];

    pub fn code(self) -> u8 {
        match self {
            CastCode::NotMember => 0,
            CastCode::Yea => 1,
            CastCode::PairedYea => 2,
            CastCode::AnnouncedYea => 3,
            CastCode::AnnouncedNay => 4,
            CastCode::PairedNay => 5,
            CastCode::Nay => 6,
            CastCode::Present => 7,
            CastCode::PresentAlt => 8,
            CastCode::NotVoting => 9,
        }
    }

    pub fn from_code(code: u8) -> Result<CastCode, CoreError> {
        CastCode::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CoreError::UnknownCastCode(code))
    }
}

/// ICPSR member identifier used by the VoteView tables.
pub type Icpsr = u32;

/// One roll-call's member→cast-code map.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollVotes {
    pub congress: u32,
    pub rollnumber: u32,
    pub icpsr_to_castcode: BTreeMap<Icpsr, CastCode>,
}

/// All loaded roll-calls' vote maps, keyed (congress, rollnumber).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VotesAll {
    pub congress_to_rollnumber_to_votes: BTreeMap<u32, BTreeMap<u32, RollVotes>>,
}

impl VotesAll {
    pub fn no_rollvotes(&self) -> usize {
        self.congress_to_rollnumber_to_votes
            .values()
            .map(|rolls| rolls.len())
            .sum()
    }

    pub fn insert(&mut self, rv: RollVotes) {
        self.congress_to_rollnumber_to_votes
            .entry(rv.congress)
            .or_default()
            .insert(rv.rollnumber, rv);
    }
}

/// Published aggregate for one roll-call, as reported by the source tables.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollCall {
    pub congress: u32,
    pub rollnumber: u32,
    pub date: String,
    pub yea_count: u32,
    pub nay_count: u32,
    pub bill_number: String,
    pub vote_result: String,
    pub vote_question: String,
    pub vote_desc: String,
}

/// All loaded published roll-call aggregates, keyed (congress, rollnumber).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollCallsAll {
    pub congress_to_rollnumber_to_rollcall: BTreeMap<u32, BTreeMap<u32, RollCall>>,
}

impl RollCallsAll {
    pub fn get(&self, congress: u32, rollnumber: u32) -> Option<&RollCall> {
        self.congress_to_rollnumber_to_rollcall
            .get(&congress)
            .and_then(|rolls| rolls.get(&rollnumber))
    }

    pub fn insert(&mut self, rc: RollCall) {
        self.congress_to_rollnumber_to_rollcall
            .entry(rc.congress)
            .or_default()
            .insert(rc.rollnumber, rc);
    }
}

/// Member→state table. Members seated for non-state territories are dropped
/// at load time, so lookups here can legitimately miss.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Members {
    pub icpsr_to_state: BTreeMap<Icpsr, St>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_code_round_trip() {
        for cc in CastCode::ALL {
            assert_eq!(CastCode::from_code(cc.code()).unwrap(), cc);
        }
        assert!(CastCode::from_code(10).is_err());
    }

    #[test]
    fn votes_all_counts_rolls_across_congresses() {
        let mut votes = VotesAll::default();
        votes.insert(RollVotes { congress: 118, rollnumber: 1, ..Default::default() });
        votes.insert(RollVotes { congress: 118, rollnumber: 2, ..Default::default() });
        votes.insert(RollVotes { congress: 117, rollnumber: 7, ..Default::default() });
        assert_eq!(votes.no_rollvotes(), 3);
    }
}
