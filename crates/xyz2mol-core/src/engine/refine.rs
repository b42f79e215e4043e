use super::connectivity::Connectivity;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::state::{BondProfile, Convergence};
use super::valence::{
    compute_neighbor_deficit_counts, deficits_from, expected_valences, remaining_increments,
};
use crate::core::models::topology::Adjacency;
use crate::core::models::view::AtomView;
use tracing::{debug, instrument, trace, warn};

/// Upper bound on refinement passes before giving up.
pub const MAX_REFINEMENT_ITERATIONS: usize = 100;

/// Raises bond orders until every atom's expected valence is met or the iteration cap
/// is reached.
///
/// Each pass recomputes all deficits and deficient-neighbor counts from the current
/// bonds, then raises exactly one bond by one:
///
/// 1. Stop with [`Convergence::Converged`] when no increments remain.
/// 2. If the remaining increment count did not change since the previous pass, the
///    required deficient-neighbor count is relaxed by one; otherwise it resets to 1.
/// 3. The first atom in index order with a positive deficit and exactly the required
///    number of deficient neighbors is chosen, together with its first deficient
///    neighbor in adjacency order. A pass with no such atom changes nothing.
///
/// After more than [`MAX_REFINEMENT_ITERATIONS`] passes the bonds built so far are
/// returned with [`Convergence::Exhausted`]. Atoms without neighbors can never be
/// satisfied, and over-bonded atoms are left as they are.
///
/// # Errors
///
/// Returns [`EngineError::UnknownElement`] if an active atom has no expected valence,
/// before any bond order is changed.
#[instrument(skip_all, fields(bonds = connectivity.bonds.len()))]
pub fn refine_bond_orders<V: AtomView + ?Sized>(
    view: &V,
    connectivity: Connectivity,
    reporter: &ProgressReporter,
) -> Result<BondProfile, EngineError> {
    let expected = expected_valences(view)?;
    let Connectivity {
        mut bonds,
        adjacency,
    } = connectivity;

    let mut neighbor_min = 1;
    let mut previous_remaining = None;
    let mut iterations = 0;

    loop {
        let deficits = deficits_from(&expected, &bonds)?;
        let neighbor_counts = compute_neighbor_deficit_counts(&adjacency, &deficits);
        let remaining = remaining_increments(&deficits);

        if remaining <= 0 {
            debug!("Bond orders converged after {} iterations.", iterations);
            return Ok(BondProfile {
                bonds,
                adjacency,
                convergence: Convergence::Converged { iterations },
            });
        }

        if previous_remaining == Some(remaining) {
            neighbor_min += 1;
        } else {
            neighbor_min = 1;
        }
        previous_remaining = Some(remaining);

        iterations += 1;
        match select_increment(&adjacency, &deficits, &neighbor_counts, neighbor_min) {
            Some((i, j)) => {
                let bond = bonds.iter_mut().find(|b| b.connects(i, j)).ok_or_else(|| {
                    EngineError::Internal(format!(
                        "Adjacent atoms {} and {} have no bond to upgrade",
                        i, j
                    ))
                })?;
                bond.order += 1;
                trace!(
                    iteration = iterations,
                    atom1 = i,
                    atom2 = j,
                    order = bond.order,
                    remaining,
                    "Raised bond order"
                );
                reporter.report(Progress::BondUpgraded {
                    iteration: iterations,
                    atom1_idx: bond.atom1_idx,
                    atom2_idx: bond.atom2_idx,
                    order: bond.order,
                });
            }
            None => trace!(
                iteration = iterations,
                neighbor_min,
                remaining,
                "No deficient atom matches the neighbor requirement"
            ),
        }

        if iterations > MAX_REFINEMENT_ITERATIONS {
            let unresolved = remaining_increments(&deficits_from(&expected, &bonds)?);
            warn!(
                "Multiple bond determination not complete after {} iterations: {} bond increments unaccounted for.",
                MAX_REFINEMENT_ITERATIONS, unresolved
            );
            return Ok(BondProfile {
                bonds,
                adjacency,
                convergence: Convergence::Exhausted {
                    iterations,
                    unresolved,
                },
            });
        }
    }
}

/// Picks the atom pair whose bond is raised in this pass.
fn select_increment(
    adjacency: &Adjacency,
    deficits: &[i32],
    neighbor_counts: &[usize],
    neighbor_min: usize,
) -> Option<(usize, usize)> {
    let i = (0..deficits.len())
        .find(|&i| deficits[i] > 0 && neighbor_counts.get(i) == Some(&neighbor_min))?;
    let j = adjacency
        .neighbors(i)
        .iter()
        .copied()
        .find(|&j| deficits.get(j).is_some_and(|&d| d > 0))?;
    Some((i, j))
}
