use super::error::EngineError;
use crate::core::elements::{covalent_radius, expected_valence};
use crate::core::models::topology::{Adjacency, Bond};
use crate::core::models::view::AtomView;
use nalgebra::Point3;
use tracing::{debug, trace};

/// Slack applied to the sum of two covalent radii when deciding whether atoms bond.
pub const BOND_FACTOR: f64 = 1.2;

/// The structural bond graph of a molecule.
///
/// `bonds` holds every bonded pair exactly once, in ascending `(atom1_idx, atom2_idx)`
/// order; `adjacency` lists the same pairs per atom, in the order they were found.
#[derive(Debug, Clone, PartialEq)]
pub struct Connectivity {
    pub bonds: Vec<Bond>,
    pub adjacency: Adjacency,
}

struct ActiveAtom {
    index: usize,
    position: Point3<f64>,
    radius: f64,
}

/// Builds the single-bond connectivity of the active atoms of `view`.
///
/// Two active atoms `i < j` are bonded iff their distance in angstrom is strictly less
/// than `BOND_FACTOR * (radius_i + radius_j)`. Every bond starts with order 1.
/// Coincident atoms are not treated specially.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] if any active atom lacks a covalent radius
/// or an expected valence. All atoms are checked before the first bond is created.
pub fn build_connectivity<V: AtomView + ?Sized>(view: &V) -> Result<Connectivity, EngineError> {
    let atom_count = view.atom_count();

    let mut active = Vec::new();
    for index in view.active_indices() {
        let symbol = view.symbol(index);
        let radius = covalent_radius(symbol).map_err(EngineError::unknown_element(index))?;
        expected_valence(symbol).map_err(EngineError::unknown_element(index))?;
        active.push(ActiveAtom {
            index,
            position: view.position_angstrom(index),
            radius,
        });
    }

    let mut bonds = Vec::new();
    let mut adjacency = Adjacency::new(atom_count);
    for (a, atom_i) in active.iter().enumerate() {
        for atom_j in &active[a + 1..] {
            let distance = nalgebra::distance(&atom_i.position, &atom_j.position);
            let threshold = BOND_FACTOR * (atom_i.radius + atom_j.radius);
            if distance < threshold {
                trace!(
                    atom1 = atom_i.index,
                    atom2 = atom_j.index,
                    distance,
                    threshold,
                    "Atoms are within bonding distance"
                );
                bonds.push(Bond::single(atom_i.index, atom_j.index));
                adjacency.link(atom_i.index, atom_j.index);
            }
        }
    }

    debug!(
        "Connectivity found {} bonds among {} active atoms.",
        bonds.len(),
        active.len()
    );
    Ok(Connectivity { bonds, adjacency })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::ElementError;
    use crate::core::models::molecule::Molecule;
    use crate::core::models::units::LengthUnit;
    use crate::engine::samples;
    use std::collections::HashSet;

    fn hydrogen_pair(separation: f64, units: LengthUnit) -> Molecule {
        let mut molecule = Molecule::new("h2", units);
        molecule.push_atom("H", Point3::new(0.0, 0.0, 0.0));
        molecule.push_atom("H", Point3::new(0.0, 0.0, separation));
        molecule
    }

    #[test]
    fn ethane_has_seven_single_bonds_in_pair_order() {
        let connectivity = build_connectivity(&samples::ethane()).unwrap();

        let pairs: Vec<(usize, usize)> = connectivity
            .bonds
            .iter()
            .map(|b| (b.atom1_idx, b.atom2_idx))
            .collect();
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (1, 6), (1, 7)]
        );
        assert!(connectivity.bonds.iter().all(|b| b.order == 1));
    }

    #[test]
    fn adjacency_matches_bonds() {
        let connectivity = build_connectivity(&samples::ethane()).unwrap();
        let adjacency = &connectivity.adjacency;

        assert_eq!(adjacency.neighbors(0), &[1, 2, 3, 4]);
        assert_eq!(adjacency.neighbors(1), &[0, 5, 6, 7]);
        assert_eq!(adjacency.neighbors(2), &[0]);
        assert_eq!(adjacency.neighbors(7), &[1]);
        assert_eq!(
            Adjacency::from_bonds(8, &connectivity.bonds),
            connectivity.adjacency
        );
    }

    #[test]
    fn no_duplicate_pairs_are_produced() {
        let connectivity = build_connectivity(&samples::ethylene()).unwrap();
        let unique: HashSet<(usize, usize)> = connectivity
            .bonds
            .iter()
            .map(|b| (b.atom1_idx, b.atom2_idx))
            .collect();
        assert_eq!(unique.len(), connectivity.bonds.len());
        assert!(connectivity.bonds.iter().all(|b| b.atom1_idx < b.atom2_idx));
    }

    #[test]
    fn distance_threshold_is_scaled_sum_of_radii() {
        // H-H threshold is 1.2 * (0.31 + 0.31) = 0.744 angstrom.
        let bonded = build_connectivity(&hydrogen_pair(0.74, LengthUnit::Angstrom)).unwrap();
        assert_eq!(bonded.bonds, vec![Bond::single(0, 1)]);

        let apart = build_connectivity(&hydrogen_pair(0.75, LengthUnit::Angstrom)).unwrap();
        assert!(apart.bonds.is_empty());
    }

    #[test]
    fn bohr_coordinates_are_converted_before_comparison() {
        // 1.4 bohr is about 0.741 angstrom.
        let bohr = build_connectivity(&hydrogen_pair(1.4, LengthUnit::Bohr)).unwrap();
        assert_eq!(bohr.bonds.len(), 1);

        let angstrom = build_connectivity(&hydrogen_pair(1.4, LengthUnit::Angstrom)).unwrap();
        assert!(angstrom.bonds.is_empty());
    }

    #[test]
    fn inactive_atoms_never_bond() {
        let mut molecule = Molecule::new("ghost", LengthUnit::Angstrom);
        molecule.push_atom("H", Point3::new(0.0, 0.0, 0.0));
        molecule.push_inactive_atom("H", Point3::new(0.0, 0.0, 0.7));
        molecule.push_atom("H", Point3::new(0.0, 0.7, 0.0));

        let connectivity = build_connectivity(&molecule).unwrap();
        assert_eq!(connectivity.bonds, vec![Bond::single(0, 2)]);
        assert!(connectivity.adjacency.neighbors(1).is_empty());
    }

    #[test]
    fn inactive_atoms_with_unknown_symbols_are_ignored() {
        let mut molecule = Molecule::new("dummy", LengthUnit::Angstrom);
        molecule.push_inactive_atom("X", Point3::origin());
        molecule.push_atom("H", Point3::new(0.0, 0.0, 0.74));
        assert!(build_connectivity(&molecule).is_ok());
    }

    #[test]
    fn coincident_atoms_are_bonded() {
        let connectivity = build_connectivity(&hydrogen_pair(0.0, LengthUnit::Angstrom)).unwrap();
        assert_eq!(connectivity.bonds.len(), 1);
    }

    #[test]
    fn element_without_expected_valence_is_rejected() {
        let mut molecule = samples::ethane();
        molecule.push_atom("Cl", Point3::new(0.0, 0.0, 2.5));

        let err = build_connectivity(&molecule).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownElement {
                index: 8,
                source: ElementError::UnknownElement {
                    symbol: "Cl".into(),
                    table: "expected valence",
                },
            }
        );
    }

    #[test]
    fn element_without_radius_is_rejected() {
        let mut molecule = Molecule::new("bad", LengthUnit::Angstrom);
        molecule.push_atom("Zz", Point3::origin());
        let err = build_connectivity(&molecule).unwrap_err();
        assert!(matches!(err, EngineError::UnknownElement { index: 0, .. }));
    }

    #[test]
    fn empty_molecule_has_no_bonds() {
        let molecule = Molecule::new("empty", LengthUnit::Angstrom);
        let connectivity = build_connectivity(&molecule).unwrap();
        assert!(connectivity.bonds.is_empty());
        assert_eq!(connectivity.adjacency.atom_count(), 0);
    }
}
