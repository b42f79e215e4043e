use super::{load_molecule, perceive_bonds};
use crate::cli::BondsArgs;
use crate::config::{CliOverrides, PartialConfig};
use crate::error::Result;
use std::fmt::Write;
use std::path::Path;
use xyz2mol::core::io::mol::atom_serials;
use xyz2mol::core::models::molecule::Molecule;
use xyz2mol::engine::state::{BondProfile, Convergence};

pub fn run(args: &BondsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = PartialConfig::load(config_path)?.merge_with_cli(CliOverrides {
        units: args.units,
        title: None,
    });

    let molecule = load_molecule(&args.input, &config)?;
    let profile = perceive_bonds(&molecule)?;

    print!("{}", format_bond_table(&molecule, &profile));
    Ok(())
}

/// Renders the bonds of `profile` as a table.
///
/// Atoms are numbered as in the MOL atom block written by `convert`: active atoms only,
/// counted from 1.
fn format_bond_table(molecule: &Molecule, profile: &BondProfile) -> String {
    let serials = atom_serials(molecule);
    let serial = |idx: usize| {
        serials
            .get(idx)
            .copied()
            .flatten()
            .map_or_else(|| "?".to_string(), |s| s.to_string())
    };
    let symbol = |idx: usize| molecule.atom(idx).map_or("?", |a| a.symbol.as_str());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} atoms, {} bonds (atoms numbered as in the MOL atom block)",
        molecule.title,
        molecule.active_atom_count(),
        profile.bonds.len()
    );
    let _ = writeln!(out, "{:>6} {:>6}  {:<5}  Order", "Atom1", "Atom2", "Pair");
    for bond in &profile.bonds {
        let pair = format!("{}-{}", symbol(bond.atom1_idx), symbol(bond.atom2_idx));
        let name = bond
            .named_order()
            .map_or_else(|| "Unknown".to_string(), |o| o.to_string());
        let _ = writeln!(
            out,
            "{:>6} {:>6}  {:<5}  {} ({})",
            serial(bond.atom1_idx),
            serial(bond.atom2_idx),
            pair,
            bond.order,
            name
        );
    }
    let _ = match profile.convergence {
        Convergence::Converged { iterations } => writeln!(
            out,
            "Converged after {} refinement pass(es) with {} bond order upgrade(s).",
            iterations,
            profile.upgrades()
        ),
        Convergence::Exhausted {
            iterations,
            unresolved,
        } => writeln!(
            out,
            "Not converged: {} bond order increment(s) unassigned after {} refinement passes.",
            unresolved, iterations
        ),
    };
    out
}
