use super::error::WorkflowError;
use super::perceive;
use crate::core::io::mol::{MolError, MolFile};
use crate::core::io::traits::MoleculeWriter;
use crate::core::models::molecule::Molecule;
use crate::engine::progress::ProgressReporter;
use crate::engine::state::BondProfile;
use std::io::Write;
use tracing::instrument;

/// Perceives the bonds of `molecule` and writes it as a MOL (V2000) record.
///
/// The record is written even when refinement is exhausted; inspect the returned
/// [`BondProfile`] to tell the two cases apart.
///
/// # Errors
///
/// Returns [`WorkflowError::Perception`] for unsupported elements (nothing is written)
/// or [`WorkflowError::Export`] if writing fails.
pub fn run(molecule: &Molecule, writer: &mut impl Write) -> Result<BondProfile, WorkflowError> {
    run_with_reporter(molecule, writer, &ProgressReporter::new())
}

/// Same as [`run`], reporting perception progress to `reporter`.
#[instrument(skip_all, name = "convert_workflow", fields(title = %molecule.title))]
pub fn run_with_reporter(
    molecule: &Molecule,
    writer: &mut impl Write,
    reporter: &ProgressReporter,
) -> Result<BondProfile, WorkflowError> {
    let profile = perceive::run_with_reporter(molecule, reporter)?;
    MolFile::write_to(molecule, &profile.bonds, writer)?;
    Ok(profile)
}

/// Perceives the bonds of `molecule` and returns its MOL record as a string.
///
/// # Errors
///
/// See [`run`].
pub fn to_mol_block(molecule: &Molecule) -> Result<(String, BondProfile), WorkflowError> {
    let mut buffer = Vec::new();
    let profile = run(molecule, &mut buffer)?;
    let text = String::from_utf8(buffer).map_err(|e| {
        WorkflowError::Export(MolError::Inconsistency(format!(
            "MOL output is not valid UTF-8: {}",
            e
        )))
    })?;
    Ok((text, profile))
}
