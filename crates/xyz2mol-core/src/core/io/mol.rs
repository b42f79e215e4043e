use crate::core::io::traits::MoleculeWriter;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::Bond;
use crate::core::models::view::AtomView;
use std::io::{self, Write};
use thiserror::Error;

const PROGRAM_LINE: &str = "  Generated by xyz2mol";

#[derive(Debug, Error)]
pub enum MolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

/// Writer for the MDL MOL (V2000) connection table.
///
/// Only active atoms are written, in index order, with coordinates converted to
/// angstrom. Bond endpoints are renumbered to 1-based serials within the written atom
/// block. The layout is fixed-width and reproduced exactly:
///
/// ```text
/// <title>
///   Generated by xyz2mol
///
///   3  2  0  0  0  0  0  0  0  0999 V2000
///     0.0000    0.0000    0.1170 O   0  0  0  0  0
/// ...
///   1  2  1  0  0  0
/// M  END
/// ```
pub struct MolFile;

impl MoleculeWriter for MolFile {
    type Error = MolError;

    fn write_to(
        molecule: &Molecule,
        bonds: &[Bond],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let factor = molecule.to_angstrom_factor();

        let serials = atom_serials(molecule);
        let atom_count = molecule.active_atom_count();

        let serial_of = |atom_idx: usize| -> Result<usize, MolError> {
            serials.get(atom_idx).copied().flatten().ok_or_else(|| {
                MolError::Inconsistency(format!(
                    "Bond atom index {} does not refer to an active atom",
                    atom_idx
                ))
            })
        };
        let bond_lines = bonds
            .iter()
            .map(|bond| {
                Ok(format!(
                    "{:>3}{:>3}{:>3}  0  0  0",
                    serial_of(bond.atom1_idx)?,
                    serial_of(bond.atom2_idx)?,
                    bond.order
                ))
            })
            .collect::<Result<Vec<_>, MolError>>()?;

        writeln!(writer, "{}", molecule.title)?;
        writeln!(writer, "{}", PROGRAM_LINE)?;
        writeln!(writer)?;
        writeln!(
            writer,
            "{:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000",
            atom_count,
            bonds.len()
        )?;

        for atom in molecule.active_atoms() {
            let p = atom.position * factor;
            writeln!(
                writer,
                " {:>9.4} {:>9.4} {:>9.4} {:<2}  0  0  0  0  0",
                p.x,
                p.y,
                p.z,
                canonical_symbol(&atom.symbol)
            )?;
        }

        for line in &bond_lines {
            writeln!(writer, "{}", line)?;
        }

        writeln!(writer, "M  END")?;
        Ok(())
    }
}

/// Maps every atom index to its 1-based serial in the written atom block.
///
/// Active atoms are numbered consecutively in index order; inactive atoms have no
/// serial.
pub fn atom_serials(molecule: &Molecule) -> Vec<Option<usize>> {
    let mut serials = vec![None; molecule.atoms().len()];
    for (serial, atom) in molecule.active_atoms().enumerate() {
        serials[atom.index] = Some(serial + 1);
    }
    serials
}

/// Capitalizes the first letter of a symbol and lowercases the rest ("CL" -> "Cl").
fn canonical_symbol(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
