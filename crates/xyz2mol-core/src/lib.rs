//! # xyz2mol Core Library
//!
//! Perceives covalent bond connectivity and bond orders for a molecule from its Cartesian
//! coordinates alone, and exports the result as an MDL MOL (V2000) connection table.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `Atom`, `Bond`),
//!   the read-only [`AtomView`](core::models::view::AtomView) capability trait, static
//!   element tables, and file I/O (XYZ input, MOL output).
//!
//! - **[`engine`]: The Logic Core.** The bond perception algorithm: a distance-threshold
//!   connectivity pass followed by a greedy, iteration-capped valence refinement that
//!   upgrades bond orders until every atom's expected valence is met.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into complete
//!   procedures, such as converting raw coordinates into a MOL record.
//!
//! ## Example
//!
//! ```
//! use nalgebra::Point3;
//! use xyz2mol::core::models::molecule::Molecule;
//! use xyz2mol::core::models::units::LengthUnit;
//! use xyz2mol::workflows::convert;
//!
//! let mut molecule = Molecule::new("hydrogen cyanide", LengthUnit::Angstrom);
//! molecule.push_atom("H", Point3::new(0.0, 0.0, -1.066));
//! molecule.push_atom("C", Point3::new(0.0, 0.0, 0.0));
//! molecule.push_atom("N", Point3::new(0.0, 0.0, 1.156));
//!
//! let (text, profile) = convert::to_mol_block(&molecule)?;
//! assert!(profile.is_converged());
//! assert!(text.ends_with("  2  3  3  0  0  0\nM  END\n"));
//! # Ok::<(), xyz2mol::workflows::WorkflowError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
