pub mod bonds;
pub mod convert;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::progress::LogProgressHandler;
use std::path::Path;
use tracing::info;
use xyz2mol::core::io::xyz::XyzFile;
use xyz2mol::core::models::molecule::Molecule;
use xyz2mol::engine::progress::ProgressReporter;
use xyz2mol::engine::state::BondProfile;
use xyz2mol::workflows::perceive;

/// Reads the input XYZ file and applies the configured title override.
fn load_molecule(input: &Path, config: &AppConfig) -> Result<Molecule> {
    info!("Loading input structure from {:?} ({})", input, config.units);
    let mut molecule =
        XyzFile::read_from_path_with_units(input, config.units).map_err(|e| {
            CliError::FileParsing {
                path: input.to_path_buf(),
                source: e.into(),
            }
        })?;
    if let Some(title) = &config.title {
        molecule.title = title.clone();
    }
    info!(
        "Loaded {} atoms ({} active).",
        molecule.atoms().len(),
        molecule.active_atom_count()
    );
    Ok(molecule)
}

fn progress_reporter() -> ProgressReporter<'static> {
    ProgressReporter::with_callback(LogProgressHandler::callback())
}

fn perceive_bonds(molecule: &Molecule) -> Result<BondProfile> {
    let profile = perceive::run_with_reporter(molecule, &progress_reporter())?;
    warn_if_exhausted(&profile);
    Ok(profile)
}

fn warn_if_exhausted(profile: &BondProfile) {
    if !profile.is_converged() {
        eprintln!(
            "Warning: bond order refinement stopped after {} passes with {} increment(s) unassigned.",
            profile.iterations(),
            profile.unresolved()
        );
    }
}
