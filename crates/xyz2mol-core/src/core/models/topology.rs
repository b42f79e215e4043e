use std::fmt;

/// Named multiplicities for the bond orders perception commonly assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BondOrder {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl BondOrder {
    /// Maps an integer bond order to its name, if it has one.
    pub fn from_order(order: u8) -> Option<Self> {
        match order {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            _ => None,
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
            }
        )
    }
}

/// A bond between two atoms of the same molecule.
///
/// The pair is unordered; it is stored with `atom1_idx < atom2_idx`. The order is an
/// integer multiplicity of at least one and is never capped, so heuristic output above
/// three is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_idx: usize, // Lower atom index
    pub atom2_idx: usize, // Higher atom index
    pub order: u8,        // Bond multiplicity (1 single, 2 double, 3 triple)
}

impl Bond {
    pub fn new(atom_a: usize, atom_b: usize, order: u8) -> Self {
        Self {
            atom1_idx: atom_a.min(atom_b),
            atom2_idx: atom_a.max(atom_b),
            order,
        }
    }

    pub fn single(atom_a: usize, atom_b: usize) -> Self {
        Self::new(atom_a, atom_b, 1)
    }

    pub fn contains(&self, atom_idx: usize) -> bool {
        self.atom1_idx == atom_idx || self.atom2_idx == atom_idx
    }

    /// Returns the atom at the other end of the bond from `atom_idx`.
    pub fn partner(&self, atom_idx: usize) -> Option<usize> {
        if self.atom1_idx == atom_idx {
            Some(self.atom2_idx)
        } else if self.atom2_idx == atom_idx {
            Some(self.atom1_idx)
        } else {
            None
        }
    }

    pub fn connects(&self, atom_a: usize, atom_b: usize) -> bool {
        self.atom1_idx == atom_a.min(atom_b) && self.atom2_idx == atom_a.max(atom_b)
    }

    pub fn named_order(&self) -> Option<BondOrder> {
        BondOrder::from_order(self.order)
    }
}

/// Per-atom lists of structurally bonded neighbors.
///
/// Built once from the connectivity pass and never changed afterwards; it records which
/// atoms are bonded, not how strongly. Neighbor lists keep the order in which bonds were
/// discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Creates an adjacency with `atom_count` empty neighbor lists.
    pub fn new(atom_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); atom_count],
        }
    }

    /// Builds the adjacency of `atom_count` atoms from a bond list.
    pub fn from_bonds(atom_count: usize, bonds: &[Bond]) -> Self {
        let mut adjacency = Self::new(atom_count);
        for bond in bonds {
            adjacency.link(bond.atom1_idx, bond.atom2_idx);
        }
        adjacency
    }

    pub(crate) fn link(&mut self, atom_a: usize, atom_b: usize) {
        self.neighbors[atom_a].push(atom_b);
        self.neighbors[atom_b].push(atom_a);
    }

    /// Returns the neighbors of `atom_idx`, or an empty slice if it is out of range.
    pub fn neighbors(&self, atom_idx: usize) -> &[usize] {
        self.neighbors
            .get(atom_idx)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, atom_idx: usize) -> usize {
        self.neighbors(atom_idx).len()
    }

    pub fn atom_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns an iterator over `(atom_idx, neighbors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(i, n)| (i, n.as_slice()))
    }
}
