//! Minimal error set for core-domain validation & parsing.

use core::fmt;

use crate::jurisdiction::St;
use crate::year::Year;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    UnknownStateCode(String),
    UnknownStateName(String),
    UnknownYearLabel(String),
    UnknownCastCode(u8),
    /// No congress→census mapping exists for this congress number.
    UnknownCongress(u32),
    /// The reference table carries no row for this (state, year).
    MissingYear { st: St, year: Year },
    /// The reference table is missing a jurisdiction entirely.
    MissingState(St),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownStateCode(code) => write!(f, "unknown state code: {code}"),
            CoreError::UnknownStateName(name) => write!(f, "unknown state name: {name}"),
            CoreError::UnknownYearLabel(label) => write!(f, "unknown census year: {label}"),
            CoreError::UnknownCastCode(code) => write!(f, "unknown cast code: {code}"),
            CoreError::UnknownCongress(congress) => {
                write!(f, "no census year mapped for congress {congress}")
            }
            CoreError::MissingYear { st, year } => {
                write!(f, "no reference data for {st} in {year}")
            }
            CoreError::MissingState(st) => write!(f, "no reference data for {st}"),
        }
    }
}

impl std::error::Error for CoreError {}
