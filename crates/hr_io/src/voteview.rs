//! Readers for the VoteView CSV exports (HSall_members, HSall_votes,
//! HSall_rollcalls).
//!
//! The exports mix chambers and congresses in one file; every loader filters
//! to the House and to the requested congress. Rows for non-state seats
//! (territorial delegates, the president) carry codes outside the 51
//! jurisdictions and are dropped, so downstream member lookups can
//! legitimately miss.

use std::path::Path;

use hr_core::{CastCode, Icpsr, Members, RollCall, RollCallsAll, RollVotes, St, VotesAll};
use serde::Deserialize;

use crate::error::IoError;

const HOUSE_CHAMBER: &str = "House";

#[derive(Debug, Deserialize)]
struct MemberRow {
    congress: u32,
    chamber: String,
    icpsr: Icpsr,
    state_abbrev: String,
}

#[derive(Debug, Deserialize)]
struct VoteRow {
    congress: u32,
    chamber: String,
    rollnumber: u32,
    icpsr: Icpsr,
    cast_code: u8,
}

#[derive(Debug, Deserialize)]
struct RollCallRow {
    congress: u32,
    chamber: String,
    rollnumber: u32,
    date: String,
    yea_count: u32,
    nay_count: u32,
    bill_number: Option<String>,
    vote_result: Option<String>,
    vote_question: Option<String>,
    vote_desc: Option<String>,
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IoError> {
    csv::Reader::from_path(path).map_err(|source| IoError::Open { path: path.into(), source })
}

/// Load the member→state table for one congress.
pub fn load_members(path: impl AsRef<Path>, congress: u32) -> Result<Members, IoError> {
    let path = path.as_ref();
    let mut members = Members::default();
    for record in open(path)?.deserialize() {
        let row: MemberRow =
            record.map_err(|source| IoError::Csv { path: path.into(), source })?;
        if row.congress != congress || row.chamber != HOUSE_CHAMBER {
            continue;
        }
        let Ok(st) = St::from_code(&row.state_abbrev) else {
            continue; // territorial delegate or the president
        };
        members.icpsr_to_state.insert(row.icpsr, st);
    }
    Ok(members)
}

/// Load one roll-call's member→cast-code map.
pub fn load_rollvotes(
    path: impl AsRef<Path>,
    congress: u32,
    rollnumber: u32,
) -> Result<RollVotes, IoError> {
    let path = path.as_ref();
    let mut rollvotes = RollVotes { congress, rollnumber, ..Default::default() };
    for record in open(path)?.deserialize() {
        let row: VoteRow =
            record.map_err(|source| IoError::Csv { path: path.into(), source })?;
        if row.congress != congress || row.chamber != HOUSE_CHAMBER || row.rollnumber != rollnumber
        {
            continue;
        }
        let castcode = CastCode::from_code(row.cast_code)?;
        rollvotes.icpsr_to_castcode.insert(row.icpsr, castcode);
    }
    Ok(rollvotes)
}

/// Load every House roll-call's votes, optionally restricted to one congress.
pub fn load_rollvotes_all(
    path: impl AsRef<Path>,
    congress: Option<u32>,
) -> Result<VotesAll, IoError> {
    let path = path.as_ref();
    let mut votes = VotesAll::default();
    for record in open(path)?.deserialize() {
        let row: VoteRow =
            record.map_err(|source| IoError::Csv { path: path.into(), source })?;
        if row.chamber != HOUSE_CHAMBER {
            continue;
        }
        if congress.is_some_and(|c| c != row.congress) {
            continue;
        }
        let castcode = CastCode::from_code(row.cast_code)?;
        votes
            .congress_to_rollnumber_to_votes
            .entry(row.congress)
            .or_default()
            .entry(row.rollnumber)
            .or_insert_with(|| RollVotes {
                congress: row.congress,
                rollnumber: row.rollnumber,
                ..Default::default()
            })
            .icpsr_to_castcode
            .insert(row.icpsr, castcode);
    }
    Ok(votes)
}

/// Load the published roll-call aggregates, optionally restricted to one
/// congress.
pub fn load_rollcalls(
    path: impl AsRef<Path>,
    congress: Option<u32>,
) -> Result<RollCallsAll, IoError> {
    let path = path.as_ref();
    let mut rollcalls = RollCallsAll::default();
    for record in open(path)?.deserialize() {
        let row: RollCallRow =
            record.map_err(|source| IoError::Csv { path: path.into(), source })?;
        if row.chamber != HOUSE_CHAMBER {
            continue;
        }
        if congress.is_some_and(|c| c != row.congress) {
            continue;
        }
        rollcalls.insert(RollCall {
            congress: row.congress,
            rollnumber: row.rollnumber,
            date: row.date,
            yea_count: row.yea_count,
            nay_count: row.nay_count,
            bill_number: row.bill_number.unwrap_or_default(),
            vote_result: row.vote_result.unwrap_or_default(),
            vote_question: row.vote_question.unwrap_or_default(),
            vote_desc: row.vote_desc.unwrap_or_default(),
        });
    }
    Ok(rollcalls)
}
