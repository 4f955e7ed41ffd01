//! `hr` — apportionment and fractional-vote analysis from the command line.
//!
//! All results go to stdout as JSON; logs go to stderr, controlled by
//! `RUST_LOG` (e.g. `RUST_LOG=hr_algo=debug`).

mod args;

mod exitcodes {
    pub const OK: u8 = 0;
    /// Input files missing or unreadable.
    pub const IO: u8 = 4;
    /// Computation or validation failure.
    pub const COMPUTE: u8 = 5;
}

use std::collections::BTreeMap;
use std::fmt;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use hr_algo::{
    assign_house_seats_divisor, assign_house_seats_priority_logged,
    calculate_residents_per_rep_for_year, find_min_pop_change_required, fractional_shares,
    AlgoError, PopChangeMode, Target, VoteOptions,
};
use hr_core::{CoreError, House, PopType, St, Year};
use hr_io::IoError;
use hr_pipeline::{analyze_congress, apportioned_house_for_year, PipelineError};

use args::{Args, Command, ModeArg, TargetArg};

#[derive(Debug)]
enum MainError {
    Pipeline(PipelineError),
    Json(serde_json::Error),
}

impl fmt::Display for MainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainError::Pipeline(e) => write!(f, "{e}"),
            MainError::Json(e) => write!(f, "failed to serialize output: {e}"),
        }
    }
}

impl From<PipelineError> for MainError {
    fn from(e: PipelineError) -> MainError {
        MainError::Pipeline(e)
    }
}

impl From<IoError> for MainError {
    fn from(e: IoError) -> MainError {
        MainError::Pipeline(e.into())
    }
}

impl From<AlgoError> for MainError {
    fn from(e: AlgoError) -> MainError {
        MainError::Pipeline(e.into())
    }
}

impl From<hr_algo::ApportionError> for MainError {
    fn from(e: hr_algo::ApportionError) -> MainError {
        MainError::Pipeline(AlgoError::from(e).into())
    }
}

impl From<CoreError> for MainError {
    fn from(e: CoreError) -> MainError {
        MainError::Pipeline(e.into())
    }
}

impl From<serde_json::Error> for MainError {
    fn from(e: serde_json::Error) -> MainError {
        MainError::Json(e)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::from(exitcodes::OK),
        Err(e) => {
            eprintln!("hr: error: {e}");
            let code = match &e {
                MainError::Pipeline(PipelineError::Io(_)) => exitcodes::IO,
                _ => exitcodes::COMPUTE,
            };
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> Result<(), MainError> {
    match args.command {
        Command::Apportion { year, pop_type, priority_log, divisor } => {
            cmd_apportion(year, pop_type.into(), priority_log, divisor)
        }
        Command::MinChange { st, year, target, mode, pop_type } => {
            cmd_min_change(st, year, target, mode, pop_type.into())
        }
        Command::ResidentsPerRep { year } => cmd_residents_per_rep(year),
        Command::AnalyzeVoting { congress, members, votes, rollcalls, use_num_votes, skip_dc } => {
            cmd_analyze_voting(congress, &members, &votes, &rollcalls, use_num_votes, skip_dc)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), MainError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct SeatRow {
    voting: u32,
    nonvoting: u32,
    pop_millions: f64,
    electoral_votes: u32,
    electoral_frac: f64,
    electoral_frac_vote: f64,
    /// Continuous fair share; absent for DC.
    #[serde(skip_serializing_if = "Option::is_none")]
    fair_share: Option<f64>,
}

#[derive(Serialize)]
struct PriorityRow {
    seat: u32,
    st: String,
    priority: f64,
}

#[derive(Serialize)]
struct ApportionOutput {
    year: String,
    pop_type: String,
    method: &'static str,
    total_voting_seats: u32,
    seats: BTreeMap<String, SeatRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority_log: Option<Vec<PriorityRow>>,
}

fn cmd_apportion(
    year: Year,
    pop_type: PopType,
    priority_log: bool,
    divisor: bool,
) -> Result<(), MainError> {
    let table = hr_io::load_states_true()?;

    let (mut house, method, log) = if divisor {
        let mut house = House::new(&table, year, pop_type)?;
        assign_house_seats_divisor(&mut house)?;
        (house, "divisor", None)
    } else if priority_log {
        let mut house = House::new(&table, year, pop_type)?;
        let log = assign_house_seats_priority_logged(&mut house)?;
        // The validated path reproduces the same assignment; run it so a
        // logged run still cross-checks against the certified counts.
        apportioned_house_for_year(&table, year, pop_type)?;
        let rows = log
            .into_iter()
            .map(|(seat, award)| PriorityRow {
                seat,
                st: award.st.code().to_string(),
                priority: award.priority,
            })
            .collect();
        (house, "priority", Some(rows))
    } else {
        (apportioned_house_for_year(&table, year, pop_type)?, "priority", None)
    };

    house.calculate_electoral_vote_fracs();
    let shares = fractional_shares(&house);
    let seats = house
        .states
        .values()
        .map(|state| {
            let row = SeatRow {
                voting: state.no_reps.voting,
                nonvoting: state.no_reps.nonvoting,
                pop_millions: state.pop,
                electoral_votes: state.electoral_votes(),
                electoral_frac: state.electoral_frac,
                electoral_frac_vote: state.electoral_frac_vote,
                fair_share: shares.get(&state.st).copied(),
            };
            (state.st.code().to_string(), row)
        })
        .collect();

    print_json(&ApportionOutput {
        year: year.to_string(),
        pop_type: format!("{pop_type:?}"),
        method,
        total_voting_seats: house.total_voting_seats(),
        seats,
        priority_log: log,
    })
}

#[derive(Serialize)]
struct MinChangeOutput {
    st: String,
    year: String,
    target: &'static str,
    mode: &'static str,
    feasible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pop_change_millions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pop_change_people: Option<i64>,
}

fn cmd_min_change(
    st: St,
    year: Year,
    target: TargetArg,
    mode: ModeArg,
    pop_type: PopType,
) -> Result<(), MainError> {
    let table = hr_io::load_states_true()?;
    let (target, target_name) = match target {
        TargetArg::Add => (Target::Add, "add"),
        TargetArg::Lose => (Target::Lose, "lose"),
    };
    let (mode, mode_name) = match mode {
        ModeArg::Shift => (PopChangeMode::ShiftPop, "shift"),
        ModeArg::Change => (PopChangeMode::ChangePop, "change"),
    };

    let min = find_min_pop_change_required(&table, year, pop_type, st, target, mode)?;
    print_json(&MinChangeOutput {
        st: st.code().to_string(),
        year: year.to_string(),
        target: target_name,
        mode: mode_name,
        feasible: min.is_some(),
        pop_change_millions: min,
        pop_change_people: min.map(|m| (m * 1e6).round() as i64),
    })
}

#[derive(Serialize)]
struct ResidentsPerRepOutput {
    year: String,
    fair: f64,
    states: BTreeMap<String, f64>,
}

fn cmd_residents_per_rep(year: Year) -> Result<(), MainError> {
    let table = hr_io::load_states_true()?;
    let out = calculate_residents_per_rep_for_year(&table, year)?;
    print_json(&ResidentsPerRepOutput {
        year: year.to_string(),
        fair: out.fair,
        states: out
            .st_to_residents_per_rep
            .into_iter()
            .map(|(st, v)| (st.code().to_string(), v))
            .collect(),
    })
}

#[derive(Serialize)]
struct FlipRow {
    rollnumber: u32,
    actual_yea: f64,
    actual_nay: f64,
    fractional_yea: f64,
    fractional_nay: f64,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    congress: u32,
    year: String,
    rolls_analyzed: usize,
    rolls_skipped: Vec<u32>,
    flipped: Vec<FlipRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_yea_shift: Option<MaxShift>,
}

#[derive(Serialize)]
struct MaxShift {
    rollnumber: u32,
    yea_shift: f64,
}

fn cmd_analyze_voting(
    congress: u32,
    members_path: &std::path::Path,
    votes_path: &std::path::Path,
    rollcalls_path: &std::path::Path,
    use_num_votes: bool,
    skip_dc: bool,
) -> Result<(), MainError> {
    let table = hr_io::load_states_true()?;
    let members = hr_io::load_members(members_path, congress)?;
    let votes = hr_io::load_rollvotes_all(votes_path, Some(congress))?;
    let rollcalls = hr_io::load_rollcalls(rollcalls_path, Some(congress))?;

    let options = VoteOptions {
        use_num_votes_as_num_seats: use_num_votes,
        skip_dc,
        ..Default::default()
    };
    let analysis = analyze_congress(&table, congress, &votes, &rollcalls, &members, &options)?;

    let flipped = analysis
        .rolls
        .iter()
        .filter(|roll| roll.results.flipped)
        .map(|roll| FlipRow {
            rollnumber: roll.rollnumber,
            actual_yea: roll.results.actual.yea(),
            actual_nay: roll.results.actual.nay(),
            fractional_yea: roll.results.fractional.yea(),
            fractional_nay: roll.results.fractional.nay(),
        })
        .collect();

    print_json(&AnalyzeOutput {
        congress,
        year: analysis.year.to_string(),
        rolls_analyzed: analysis.rolls.len(),
        rolls_skipped: analysis.skipped,
        flipped,
        max_yea_shift: analysis
            .max_shift
            .map(|(rollnumber, yea_shift)| MaxShift { rollnumber, yea_shift }),
    })
}
