use super::atom::Atom;
use super::units::LengthUnit;
use super::view::AtomView;
use nalgebra::Point3;

/// An ordered list of atoms with a title line and a length unit.
///
/// Atom indices are assigned in insertion order and never change, so bond endpoints
/// produced by the engine can always be resolved against the molecule they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    /// Free-form title, written as the first line of exported records.
    pub title: String,
    /// The length unit of every atom position.
    pub units: LengthUnit,
    atoms: Vec<Atom>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    ///
    /// # Arguments
    ///
    /// * `title` - The molecule title.
    /// * `units` - The length unit of positions added later.
    pub fn new(title: &str, units: LengthUnit) -> Self {
        Self {
            title: title.to_string(),
            units,
            atoms: Vec::new(),
        }
    }

    /// Appends an active atom and returns its index.
    pub fn push_atom(&mut self, symbol: &str, position: Point3<f64>) -> usize {
        let index = self.atoms.len();
        self.atoms.push(Atom::new(index, symbol, position));
        index
    }

    /// Appends an inactive (ghost or dummy) atom and returns its index.
    pub fn push_inactive_atom(&mut self, symbol: &str, position: Point3<f64>) -> usize {
        let index = self.atoms.len();
        self.atoms.push(Atom::inactive(index, symbol, position));
        index
    }

    /// Returns a slice of all atoms, active or not.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Retrieves an atom by its index.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the index is in range, otherwise `None`.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Returns an iterator over the active atoms in index order.
    pub fn active_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(|a| a.active)
    }

    pub fn active_atom_count(&self) -> usize {
        self.active_atoms().count()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl AtomView for Molecule {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn symbol(&self, index: usize) -> &str {
        &self.atoms[index].symbol
    }

    fn position(&self, index: usize) -> Point3<f64> {
        self.atoms[index].position
    }

    fn is_active(&self, index: usize) -> bool {
        self.atoms[index].active
    }

    fn units(&self) -> LengthUnit {
        self.units
    }
}
