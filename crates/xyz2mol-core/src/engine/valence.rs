//! Valence bookkeeping for bond order refinement.
//!
//! A deficit is the expected valence of an atom minus the sum of the orders of its
//! bonds. Positive deficits mark under-bonded atoms; negative deficits (over-bonded atoms,
//! usually from generous distance thresholds) are reported as-is and never corrected.
//! Inactive atoms always have a deficit of zero.

use super::error::EngineError;
use crate::core::elements::expected_valence;
use crate::core::models::topology::{Adjacency, Bond};
use crate::core::models::view::AtomView;

/// Looks up the expected valence of every atom of `view`, using 0 for inactive atoms.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] for the first active atom whose element has
/// no expected valence.
pub fn expected_valences<V: AtomView + ?Sized>(view: &V) -> Result<Vec<i32>, EngineError> {
    (0..view.atom_count())
        .map(|i| {
            if view.is_active(i) {
                expected_valence(view.symbol(i)).map_err(EngineError::unknown_element(i))
            } else {
                Ok(0)
            }
        })
        .collect()
}

/// Computes per-atom deficits from precomputed expected valences and a bond list.
///
/// # Errors
///
/// Returns [`EngineError::AtomOutOfRange`] if a bond references an atom outside
/// `expected`.
pub fn deficits_from(expected: &[i32], bonds: &[Bond]) -> Result<Vec<i32>, EngineError> {
    let mut deficits = expected.to_vec();
    for bond in bonds {
        for index in [bond.atom1_idx, bond.atom2_idx] {
            let deficit = deficits
                .get_mut(index)
                .ok_or(EngineError::AtomOutOfRange {
                    index,
                    atom_count: expected.len(),
                })?;
            *deficit -= i32::from(bond.order);
        }
    }
    Ok(deficits)
}

/// Computes the valence deficit of every atom of `view` under the given bonds.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] for an unrecognized active element, or
/// [`EngineError::AtomOutOfRange`] for a bond that does not fit the view.
pub fn compute_deficits<V: AtomView + ?Sized>(
    view: &V,
    bonds: &[Bond],
) -> Result<Vec<i32>, EngineError> {
    let expected = expected_valences(view)?;
    deficits_from(&expected, bonds)
}

/// Counts, for every atom, the structural neighbors that still have a positive deficit.
///
/// Neighbors missing from `deficits` count as satisfied.
pub fn compute_neighbor_deficit_counts(adjacency: &Adjacency, deficits: &[i32]) -> Vec<usize> {
    adjacency
        .iter()
        .map(|(_, neighbors)| {
            neighbors
                .iter()
                .filter(|&&j| deficits.get(j).is_some_and(|&d| d > 0))
                .count()
        })
        .collect()
}

/// Estimates how many bond order increments are still needed: half the sum of the
/// positive deficits, rounded down.
pub fn remaining_increments(deficits: &[i32]) -> i32 {
    deficits.iter().filter(|&&d| d > 0).sum::<i32>() / 2
}
