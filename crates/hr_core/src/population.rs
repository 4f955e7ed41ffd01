//! Population snapshots and the mean helpers used by seat rounding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which population figure an operation works from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PopType {
    /// Resident population only.
    Resident,
    /// Overseas component included in the apportionment basis.
    Overseas,
    /// Population used for apportionment (resident + overseas where counted).
    Apportionment,
}

/// A jurisdiction's population at one census year, in millions of people.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pop {
    pub resident: f64,
    pub overseas: f64,
    pub apportionment: f64,
}

impl Pop {
    pub fn get(&self, pop_type: PopType) -> f64 {
        match pop_type {
            PopType::Resident => self.resident,
            PopType::Overseas => self.overseas,
            PopType::Apportionment => self.apportionment,
        }
    }
}

pub fn arithmetic_mean(n: f64, m: f64) -> f64 {
    (n + m) / 2.0
}

pub fn harmonic_mean(n: f64, m: f64) -> f64 {
    1.0 / arithmetic_mean(1.0 / n, 1.0 / m)
}

pub fn geometric_mean(n: f64, m: f64) -> f64 {
    (n * m).sqrt()
}
