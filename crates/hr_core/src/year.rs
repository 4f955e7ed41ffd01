//! Census years and the congress→census lookup.

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decennial census year with reference data available.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Year {
    Y1960,
    Y1970,
    Y1980,
    Y1990,
    Y2000,
    Y2010,
    Y2020,
}

impl Year {
    /// All supported years, ascending.
    pub const ALL: [Year; 7] = [
        Year::Y1960,
        Year::Y1970,
        Year::Y1980,
        Year::Y1990,
        Year::Y2000,
        Year::Y2010,
        Year::Y2020,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Year::Y1960 => "1960",
            Year::Y1970 => "1970",
            Year::Y1980 => "1980",
            Year::Y1990 => "1990",
            Year::Y2000 => "2000",
            Year::Y2010 => "2010",
            Year::Y2020 => "2020",
        }
    }

    pub fn from_label(label: &str) -> Result<Year, CoreError> {
        match label {
            "1960" => Ok(Year::Y1960),
            "1970" => Ok(Year::Y1970),
            "1980" => Ok(Year::Y1980),
            "1990" => Ok(Year::Y1990),
            "2000" => Ok(Year::Y2000),
            "2010" => Ok(Year::Y2010),
            "2020" => Ok(Year::Y2020),
        _ => Err(CoreError::UnknownYearLabel(label.into())),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Year {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Year::from_label(s)
    }
}

/// Census year governing a congress's apportionment.
///
/// A census taken in year Y first applies to the House elected in Y+2, so each
/// census covers five congresses. The table is static configuration, not an
/// inference.
pub fn census_year_for_congress(congress: u32) -> Result<Year, CoreError> {
    match congress {
        88..=92 => Ok(Year::Y1960),
        93..=97 => Ok(Year::Y1970),
        98..=102 => Ok(Year::Y1980),
        103..=107 => Ok(Year::Y1990),
        108..=112 => Ok(Year::Y2000),
        113..=117 => Ok(Year::Y2010),
        118..=122 => Ok(Year::Y2020),
        _ => Err(CoreError::UnknownCongress(congress)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for year in Year::ALL {
            assert_eq!(Year::from_label(year.label()).unwrap(), year);
        }
        assert!(Year::from_label("1950").is_err());
    }

    #[test]
    fn congress_lookup_covers_each_decade() {
        assert_eq!(census_year_for_congress(88).unwrap(), Year::Y1960);
        assert_eq!(census_year_for_congress(92).unwrap(), Year::Y1960);
        assert_eq!(census_year_for_congress(93).unwrap(), Year::Y1970);
        assert_eq!(census_year_for_congress(110).unwrap(), Year::Y2000);
        assert_eq!(census_year_for_congress(117).unwrap(), Year::Y2010);
        assert_eq!(census_year_for_congress(118).unwrap(), Year::Y2020);
        assert!(census_year_for_congress(87).is_err());
        assert!(census_year_for_congress(123).is_err());
    }
}
