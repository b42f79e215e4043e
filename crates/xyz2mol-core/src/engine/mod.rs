//! # Engine Module
//!
//! The bond perception algorithm. Given an [`AtomView`](crate::core::models::view::AtomView),
//! the engine first decides which atoms are bonded at all and then decides how many
//! bonds each bonded pair shares.
//!
//! ## Architecture
//!
//! - **Connectivity** ([`connectivity`]) - Distance-threshold bond detection producing
//!   single bonds and the fixed structural adjacency
//! - **Valence Accounting** ([`valence`]) - Per-atom valence deficits and the number of
//!   deficient neighbors of each atom
//! - **Refinement** ([`refine`]) - Greedy, iteration-capped bond order upgrades driven by
//!   the deficits
//! - **Results** ([`state`]) - The final bond profile and how refinement ended
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks for phases and upgrades
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Every computation is a deterministic function of its input: identical atom
//! orderings always produce identical bond lists.

pub mod connectivity;
pub mod error;
pub mod progress;
pub mod refine;
#[cfg(test)]
pub(crate) mod samples;
pub mod state;
pub mod valence;
