use crate::core::models::topology::{Adjacency, Bond};

/// How bond order refinement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// Every required increment was assigned.
    Converged { iterations: usize },
    /// The iteration cap was hit; `unresolved` increments were still missing.
    Exhausted { iterations: usize, unresolved: i32 },
}

/// The outcome of bond perception: the final bonds, the structural adjacency they were
/// refined over, and how refinement ended.
///
/// When [`Convergence::Exhausted`] is reported the bonds are a best effort and do not
/// satisfy every atom's expected valence.
#[derive(Debug, Clone, PartialEq)]
pub struct BondProfile {
    pub bonds: Vec<Bond>,
    pub adjacency: Adjacency,
    pub convergence: Convergence,
}

impl BondProfile {
    pub fn is_converged(&self) -> bool {
        matches!(self.convergence, Convergence::Converged { .. })
    }

    pub fn iterations(&self) -> usize {
        match self.convergence {
            Convergence::Converged { iterations } | Convergence::Exhausted { iterations, .. } => {
                iterations
            }
        }
    }

    /// Returns how many bond order increments refinement applied in total.
    ///
    /// This can be lower than [`iterations`](Self::iterations), since passes that only
    /// relax the neighbor requirement raise no bond.
    pub fn upgrades(&self) -> usize {
        self.bonds
            .iter()
            .map(|b| usize::from(b.order.saturating_sub(1)))
            .sum()
    }

    /// Returns the number of increments refinement could not assign (0 when converged).
    pub fn unresolved(&self) -> i32 {
        match self.convergence {
            Convergence::Converged { .. } => 0,
            Convergence::Exhausted { unresolved, .. } => unresolved,
        }
    }

    /// Finds the bond between two atoms, in either order.
    pub fn bond_between(&self, atom_a: usize, atom_b: usize) -> Option<&Bond> {
        self.bonds.iter().find(|b| b.connects(atom_a, atom_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(convergence: Convergence) -> BondProfile {
        let bonds = vec![Bond::new(0, 1, 2)];
        BondProfile {
            adjacency: Adjacency::from_bonds(2, &bonds),
            bonds,
            convergence,
        }
    }

    #[test]
    fn converged_profile_reports_no_unresolved_increments() {
        let p = profile(Convergence::Converged { iterations: 3 });
        assert!(p.is_converged());
        assert_eq!(p.iterations(), 3);
        assert_eq!(p.unresolved(), 0);
    }

    #[test]
    fn exhausted_profile_reports_unresolved_increments() {
        let p = profile(Convergence::Exhausted {
            iterations: 101,
            unresolved: 2,
        });
        assert!(!p.is_converged());
        assert_eq!(p.iterations(), 101);
        assert_eq!(p.unresolved(), 2);
    }

    #[test]
    fn upgrades_count_increments_above_single_bonds() {
        let bonds = vec![Bond::new(0, 1, 3), Bond::single(1, 2), Bond::new(2, 3, 2)];
        let p = BondProfile {
            adjacency: Adjacency::from_bonds(4, &bonds),
            bonds,
            convergence: Convergence::Converged { iterations: 5 },
        };
        assert_eq!(p.upgrades(), 3);
        assert_eq!(p.iterations(), 5);
    }

    #[test]
    fn bond_between_is_order_independent() {
        let p = profile(Convergence::Converged { iterations: 0 });
        assert_eq!(p.bond_between(1, 0).map(|b| b.order), Some(2));
        assert!(p.bond_between(0, 2).is_none());
    }
}
