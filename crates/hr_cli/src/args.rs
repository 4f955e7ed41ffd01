//! CLI surface: subcommands and shared flags.
//!
//! States are given as postal codes (`--st NY`), years as census years
//! (`--year 2020`). The VoteView exports are passed by path; the census
//! reference table is compiled in and needs no file.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hr_core::{PopType, St, Year};

#[derive(Debug, Parser)]
#[command(name = "hr", about = "House apportionment and fractional-vote analysis")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apportion the House for one census year and print seats per state.
    Apportion {
        #[arg(long)]
        year: Year,
        #[arg(long, value_enum, default_value_t = PopTypeArg::Apportionment)]
        pop_type: PopTypeArg,
        /// Also print the per-seat priority award log (seats 51..=435).
        #[arg(long)]
        priority_log: bool,
        /// Use the divisor-rounding method instead of the priority method.
        /// Skips the comparison against the certified counts.
        #[arg(long)]
        divisor: bool,
    },

    /// Minimum population change for a state to gain or lose one seat.
    MinChange {
        #[arg(long)]
        st: St,
        #[arg(long)]
        year: Year,
        #[arg(long, value_enum)]
        target: TargetArg,
        #[arg(long, value_enum, default_value_t = ModeArg::Shift)]
        mode: ModeArg,
        #[arg(long, value_enum, default_value_t = PopTypeArg::Apportionment)]
        pop_type: PopTypeArg,
    },

    /// Residents per voting representative for one census year.
    ResidentsPerRep {
        #[arg(long)]
        year: Year,
    },

    /// Fractional-vote analysis of one congress from VoteView exports.
    AnalyzeVoting {
        #[arg(long)]
        congress: u32,
        /// HSall_members.csv
        #[arg(long)]
        members: PathBuf,
        /// HSall_votes.csv
        #[arg(long)]
        votes: PathBuf,
        /// HSall_rollcalls.csv
        #[arg(long)]
        rollcalls: PathBuf,
        /// Re-apportion each roll at a seat total equal to its counted votes.
        #[arg(long)]
        use_num_votes: bool,
        /// Drop DC's delegate instead of counting it at weight 1.
        #[arg(long)]
        skip_dc: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PopTypeArg {
    Resident,
    Overseas,
    Apportionment,
}

impl From<PopTypeArg> for PopType {
    fn from(arg: PopTypeArg) -> PopType {
        match arg {
            PopTypeArg::Resident => PopType::Resident,
            PopTypeArg::Overseas => PopType::Overseas,
            PopTypeArg::Apportionment => PopType::Apportionment,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TargetArg {
    Add,
    Lose,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    /// Conserved shift between the state and the rest of the country.
    Shift,
    /// In-place change; the US total moves with the state.
    Change,
}
