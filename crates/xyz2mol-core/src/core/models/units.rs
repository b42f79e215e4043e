use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bohr radius in angstrom (CODATA 2006).
pub const BOHR_TO_ANGSTROM: f64 = 0.52917720859;

/// The length unit in which a molecule's coordinates are expressed.
///
/// Bond perception always compares distances in angstrom, so every unit carries a fixed
/// factor converting its values to angstrom.
///
/// Deserializes from the same case-insensitive labels accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LengthUnit {
    #[default]
    Angstrom,
    Bohr,
}

impl LengthUnit {
    /// Returns the factor that converts a length in this unit to angstrom.
    pub fn to_angstrom_factor(self) -> f64 {
        match self {
            Self::Angstrom => 1.0,
            Self::Bohr => BOHR_TO_ANGSTROM,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown length unit '{0}'. Expected 'angstrom' or 'bohr'.")]
pub struct ParseLengthUnitError(pub String);

impl FromStr for LengthUnit {
    type Err = ParseLengthUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "angstrom" | "angstroms" | "ang" | "a" => Ok(Self::Angstrom),
            "bohr" | "au" | "a.u." => Ok(Self::Bohr),
            _ => Err(ParseLengthUnitError(s.to_string())),
        }
    }
}

impl TryFrom<String> for LengthUnit {
    type Error = ParseLengthUnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Angstrom => "Angstrom",
                Self::Bohr => "Bohr",
            }
        )
    }
}
