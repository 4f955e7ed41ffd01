//! Closed set of jurisdictions: the 50 states plus the District of Columbia.
//!
//! Variant order is the canonical order everywhere in this workspace: maps are
//! keyed by `St`, scans iterate in `St` order, and the apportionment tie-break
//! (practically unreachable with real census data) resolves to the earliest
//! variant. The declaration order follows the 2020 population ranking.

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! def_jurisdictions {
    ($( $variant:ident => ($code:literal, $name:literal) ),+ $(,)?) => {
        /// One of the 50 states or the District of Columbia.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum St {
            $( $variant, )+
        }

        impl St {
            /// All 51 jurisdictions in canonical order.
            pub const ALL: [St; 51] = [ $( St::$variant, )+ ];

            /// Stable two-letter postal code.
            pub fn code(self) -> &'static str {
                match self {
                    $( St::$variant => $code, )+
                }
            }

            /// Display name ("District of Columbia", not title-cased blindly).
            pub fn name(self) -> &'static str {
                match self {
                    $( St::$variant => $name, )+
                }
            }

            /// Parse from a two-letter postal code.
            pub fn from_code(code: &str) -> Result<St, CoreError> {
                match code {
                    $( $code => Ok(St::$variant), )+
                    _ => Err(CoreError::UnknownStateCode(code.into())),
                }
            }

            /// Parse from a display name.
            pub fn from_name(name: &str) -> Result<St, CoreError> {
                match name {
                    $( $name => Ok(St::$variant), )+
                    _ => Err(CoreError::UnknownStateName(name.into())),
                }
            }
        }
    };
}

def_jurisdictions! {
    California => ("CA", "California"),
    Texas => ("TX", "Texas"),
    Florida => ("FL", "Florida"),
    NewYork => ("NY", "New York"),
    Pennsylvania => ("PA", "Pennsylvania"),
    Illinois => ("IL", "Illinois"),
    Ohio => ("OH", "Ohio"),
    Georgia => ("GA", "Georgia"),
    NorthCarolina => ("NC", "North Carolina"),
    Michigan => ("MI", "Michigan"),
    NewJersey => ("NJ", "New Jersey"),
    Virginia => ("VA", "Virginia"),
    Washington => ("WA", "Washington"),
    Arizona => ("AZ", "Arizona"),
    Massachusetts => ("MA", "Massachusetts"),
    Tennessee => ("TN", "Tennessee"),
    Indiana => ("IN", "Indiana"),
    Missouri => ("MO", "Missouri"),
    Maryland => ("MD", "Maryland"),
    Wisconsin => ("WI", "Wisconsin"),
    Colorado => ("CO", "Colorado"),
    Minnesota => ("MN", "Minnesota"),
    SouthCarolina => ("SC", "South Carolina"),
    Alabama => ("AL", "Alabama"),
    Louisiana => ("LA", "Louisiana"),
    Kentucky => ("KY", "Kentucky"),
    Oregon => ("OR", "Oregon"),
    Oklahoma => ("OK", "Oklahoma"),
    Connecticut => ("CT", "Connecticut"),
    Utah => ("UT", "Utah"),
    Iowa => ("IA", "Iowa"),
    Nevada => ("NV", "Nevada"),
    Arkansas => ("AR", "Arkansas"),
    Mississippi => ("MS", "Mississippi"),
    Kansas => ("KS", "Kansas"),
    NewMexico => ("NM", "New Mexico"),
    Nebraska => ("NE", "Nebraska"),
    WestVirginia => ("WV", "West Virginia"),
    Idaho => ("ID", "Idaho"),
    Hawaii => ("HI", "Hawaii"),
    NewHampshire => ("NH", "New Hampshire"),
    Maine => ("ME", "Maine"),
    Montana => ("MT", "Montana"),
    RhodeIsland => ("RI", "Rhode Island"),
    Delaware => ("DE", "Delaware"),
    SouthDakota => ("SD", "South Dakota"),
    NorthDakota => ("ND", "North Dakota"),
    Alaska => ("AK", "Alaska"),
    DistrictOfColumbia => ("DC", "District of Columbia"),
    Vermont => ("VT", "Vermont"),
    Wyoming => ("WY", "Wyoming"),
}

impl St {
    /// The 50 voting-eligible states (everything but DC), in canonical order.
    pub fn all_except_dc() -> impl Iterator<Item = St> {
        St::ALL
            .iter()
            .copied()
            .filter(|st| *st != St::DistrictOfColumbia)
    }

    pub fn is_dc(self) -> bool {
        self == St::DistrictOfColumbia
    }
}

impl fmt::Display for St {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for St {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        St::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_set_of_51_with_one_dc() {
        assert_eq!(St::ALL.len(), 51);
        assert_eq!(St::ALL.iter().filter(|st| st.is_dc()).count(), 1);
        assert_eq!(St::all_except_dc().count(), 50);
    }

    #[test]
    fn code_round_trip() {
        for st in St::ALL {
            assert_eq!(St::from_code(st.code()).unwrap(), st);
            assert_eq!(st.code().len(), 2);
        }
        assert!(St::from_code("PR").is_err());
    }

    #[test]
    fn name_round_trip() {
        for st in St::ALL {
            assert_eq!(St::from_name(st.name()).unwrap(), st);
        }
        assert_eq!(St::DistrictOfColumbia.name(), "District of Columbia");
    }
}
