//! Static per-element reference data used by bond perception.
//!
//! Covalent radii are the single-bond radii of Alvarez (Dalton Trans., 2008), in
//! angstrom; for Mn, Fe and Co the high-spin values are used. Expected valences cover
//! only the elements whose usual bonding is unambiguous enough for valence-driven bond
//! order assignment.
//!
//! Lookups trim whitespace and ignore case, so `"CL"`, `"cl"` and `" Cl "` all resolve
//! to chlorine.

use phf::{Map, phf_map};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Unknown element '{symbol}': no {table} is defined for it")]
    UnknownElement { symbol: String, table: &'static str },
}

static COVALENT_RADII: Map<&'static str, f64> = phf_map! {
    "H" => 0.31, "HE" => 0.28,
    "LI" => 1.28, "BE" => 0.96, "B" => 0.84, "C" => 0.76, "N" => 0.71, "O" => 0.66,
    "F" => 0.57, "NE" => 0.58,
    "NA" => 1.66, "MG" => 1.41, "AL" => 1.21, "SI" => 1.11, "P" => 1.07, "S" => 1.05,
    "CL" => 1.02, "AR" => 1.06,
    "K" => 2.03, "CA" => 1.76, "SC" => 1.70, "TI" => 1.60, "V" => 1.53, "CR" => 1.39,
    "MN" => 1.61, "FE" => 1.52, "CO" => 1.50, "NI" => 1.24, "CU" => 1.32, "ZN" => 1.22,
    "GA" => 1.22, "GE" => 1.20, "AS" => 1.19, "SE" => 1.20, "BR" => 1.20, "KR" => 1.16,
    "RB" => 2.20, "SR" => 1.95, "Y" => 1.90, "ZR" => 1.75, "NB" => 1.64, "MO" => 1.54,
    "TC" => 1.47, "RU" => 1.46, "RH" => 1.42, "PD" => 1.39, "AG" => 1.45, "CD" => 1.44,
    "IN" => 1.42, "SN" => 1.39, "SB" => 1.39, "TE" => 1.38, "I" => 1.39, "XE" => 1.40,
};

static EXPECTED_VALENCES: Map<&'static str, i32> = phf_map! {
    "H" => 1,
    "C" => 4,
    "N" => 3,
    "O" => 2,
    "F" => 1,
    "P" => 3,
    "S" => 2,
};

fn table_key(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// Returns the covalent radius of `symbol` in angstrom.
///
/// # Errors
///
/// Returns [`ElementError::UnknownElement`] if no radius is tabulated for the symbol.
pub fn covalent_radius(symbol: &str) -> Result<f64, ElementError> {
    COVALENT_RADII
        .get(table_key(symbol).as_str())
        .copied()
        .ok_or_else(|| ElementError::UnknownElement {
            symbol: symbol.trim().to_string(),
            table: "covalent radius",
        })
}

/// Returns the total bond order an atom of `symbol` is expected to carry.
///
/// # Errors
///
/// Returns [`ElementError::UnknownElement`] for anything outside H, C, N, O, F, P and S.
pub fn expected_valence(symbol: &str) -> Result<i32, ElementError> {
    EXPECTED_VALENCES
        .get(table_key(symbol).as_str())
        .copied()
        .ok_or_else(|| ElementError::UnknownElement {
            symbol: symbol.trim().to_string(),
            table: "expected valence",
        })
}
