use crate::core::models::molecule::Molecule;
use crate::core::models::units::LengthUnit;
use nalgebra::Point3;

fn build(title: &str, atoms: &[(&str, [f64; 3])]) -> Molecule {
    let mut molecule = Molecule::new(title, LengthUnit::Angstrom);
    for (symbol, [x, y, z]) in atoms {
        molecule.push_atom(symbol, Point3::new(*x, *y, *z));
    }
    molecule
}

/// Staggered ethane: C0, C1, then three hydrogens on C0 and three on C1.
pub(crate) fn ethane() -> Molecule {
    build(
        "ethane",
        &[
            ("C", [0.0, 0.0, 0.765]),
            ("C", [0.0, 0.0, -0.765]),
            ("H", [1.018, 0.0, 1.164]),
            ("H", [-0.509, 0.882, 1.164]),
            ("H", [-0.509, -0.882, 1.164]),
            ("H", [-1.018, 0.0, -1.164]),
            ("H", [0.509, 0.882, -1.164]),
            ("H", [0.509, -0.882, -1.164]),
        ],
    )
}

/// Planar ethylene: C0, C1, two hydrogens on C0, two on C1.
pub(crate) fn ethylene() -> Molecule {
    build(
        "ethylene",
        &[
            ("C", [0.0, 0.0, 0.667]),
            ("C", [0.0, 0.0, -0.667]),
            ("H", [0.0, 0.923, 1.238]),
            ("H", [0.0, -0.923, 1.238]),
            ("H", [0.0, 0.923, -1.238]),
            ("H", [0.0, -0.923, -1.238]),
        ],
    )
}

/// Linear acetylene: C0, C1, H on C0, H on C1.
pub(crate) fn acetylene() -> Molecule {
    build(
        "acetylene",
        &[
            ("C", [0.0, 0.0, 0.601]),
            ("C", [0.0, 0.0, -0.601]),
            ("H", [0.0, 0.0, 1.663]),
            ("H", [0.0, 0.0, -1.663]),
        ],
    )
}

/// Formaldehyde: C0, O1, two hydrogens on C0.
pub(crate) fn formaldehyde() -> Molecule {
    build(
        "formaldehyde",
        &[
            ("C", [0.0, 0.0, -0.529]),
            ("O", [0.0, 0.0, 0.677]),
            ("H", [0.0, 0.935, -1.117]),
            ("H", [0.0, -0.935, -1.117]),
        ],
    )
}

/// A lone carbon atom far from anything it could bond to.
pub(crate) fn isolated_carbon() -> Molecule {
    build("carbon atom", &[("C", [0.0, 0.0, 0.0])])
}
