use crate::core::models::view::AtomView;
use crate::engine::connectivity::build_connectivity;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::refine::refine_bond_orders;
use crate::engine::state::{BondProfile, Convergence};
use tracing::{info, instrument};

/// Perceives bonds and bond orders for the atoms of `view`.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] if any active atom has an element outside
/// the supported set; no bonds are produced in that case.
pub fn run<V: AtomView + ?Sized>(view: &V) -> Result<BondProfile, EngineError> {
    run_with_reporter(view, &ProgressReporter::new())
}

/// Same as [`run`], reporting phases and bond upgrades to `reporter`.
#[instrument(skip_all, name = "perception_workflow", fields(atoms = view.atom_count()))]
pub fn run_with_reporter<V: AtomView + ?Sized>(
    view: &V,
    reporter: &ProgressReporter,
) -> Result<BondProfile, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Connectivity",
    });
    let connectivity = build_connectivity(view)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Bond Order Refinement",
    });
    let profile = refine_bond_orders(view, connectivity, reporter)?;
    reporter.report(Progress::PhaseFinish);

    match profile.convergence {
        Convergence::Converged { iterations } => info!(
            "Perceived {} bonds ({} order upgrades in {} refinement passes).",
            profile.bonds.len(),
            profile.upgrades(),
            iterations
        ),
        Convergence::Exhausted { unresolved, .. } => {
            reporter.report(Progress::Message(format!(
                "{} bonds unaccounted for",
                unresolved
            )));
        }
    }
    Ok(profile)
}
