use nalgebra::Point3;

/// Represents an atom of a molecule as seen by bond perception.
///
/// Only the element symbol, the Cartesian position and the active flag take part in
/// perception. Inactive atoms (ghost or dummy centers) keep their slot in the atom list
/// so that indices stay stable, but they never bond and are never counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The stable, 0-based position of the atom in its molecule.
    pub index: usize,
    /// The element symbol (e.g., "C", "Cl").
    pub symbol: String,
    /// The 3D coordinates of the atom, in the owning molecule's length unit.
    pub position: Point3<f64>,
    /// Whether the atom is a real center that participates in bonding.
    pub active: bool,
}

impl Atom {
    /// Creates a new active `Atom`.
    ///
    /// # Arguments
    ///
    /// * `index` - The position of the atom within its molecule.
    /// * `symbol` - The element symbol; surrounding whitespace is removed.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(index: usize, symbol: &str, position: Point3<f64>) -> Self {
        Self {
            index,
            symbol: symbol.trim().to_string(),
            position,
            active: true,
        }
    }

    /// Creates a new inactive (ghost or dummy) `Atom`.
    pub fn inactive(index: usize, symbol: &str, position: Point3<f64>) -> Self {
        Self {
            active: false,
            ..Self::new(index, symbol, position)
        }
    }
}
