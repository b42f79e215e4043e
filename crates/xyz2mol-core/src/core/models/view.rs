use super::units::LengthUnit;
use nalgebra::Point3;

/// A read-only view of the atoms the perception engine needs.
///
/// Any molecule container can take part in bond perception by exposing its atom count,
/// element symbols, positions, active flags and length unit through this trait. Indices
/// run from `0` to `atom_count() - 1`; implementors may panic on out-of-range indices.
pub trait AtomView {
    /// Returns the total number of atoms, active or not.
    fn atom_count(&self) -> usize;

    /// Returns the element symbol of atom `index`.
    fn symbol(&self, index: usize) -> &str;

    /// Returns the position of atom `index` in the view's native length unit.
    fn position(&self, index: usize) -> Point3<f64>;

    /// Returns whether atom `index` participates in bonding.
    fn is_active(&self, index: usize) -> bool;

    /// Returns the native length unit of [`AtomView::position`].
    fn units(&self) -> LengthUnit;

    /// Returns the factor converting native positions to angstrom.
    fn to_angstrom_factor(&self) -> f64 {
        self.units().to_angstrom_factor()
    }

    /// Returns the position of atom `index` in angstrom.
    fn position_angstrom(&self, index: usize) -> Point3<f64> {
        self.position(index) * self.to_angstrom_factor()
    }

    /// Returns the indices of all active atoms in ascending order.
    fn active_indices(&self) -> Vec<usize> {
        (0..self.atom_count()).filter(|&i| self.is_active(i)).collect()
    }
}
