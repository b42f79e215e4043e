use crate::core::models::molecule::Molecule;
use crate::core::models::topology::Bond;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for formats that molecules can be read from.
pub trait MoleculeReader {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error>;

    /// Reads a molecule from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Molecule, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the interface for formats that a molecule and its bonds can be written to.
pub trait MoleculeWriter {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a molecule and its bond list to a writer.
    ///
    /// # Arguments
    ///
    /// * `molecule` - The molecule whose atoms are written.
    /// * `bonds` - Bonds between atoms of `molecule`, by atom index.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the bonds do not match the molecule.
    fn write_to(
        molecule: &Molecule,
        bonds: &[Bond],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a molecule and its bond list to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        molecule: &Molecule,
        bonds: &[Bond],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(molecule, bonds, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
