//! # Core Models Module
//!
//! Data structures describing a molecule as the perception engine sees it.
//!
//! ## Key Components
//!
//! - [`atom`] - A single atom: element symbol, position, and active flag
//! - [`molecule`] - An ordered atom list with a title and a length unit
//! - [`topology`] - Bonds and the structural adjacency derived from them
//! - [`units`] - Length units and their conversion to angstrom
//! - [`view`] - The read-only [`AtomView`](view::AtomView) capability trait
//!
//! ## Usage
//!
//! ```ignore
//! use xyz2mol::core::models::{molecule::Molecule, units::LengthUnit};
//!
//! let mut molecule = Molecule::new("water", LengthUnit::Angstrom);
//! molecule.push_atom("O", Point3::new(0.0, 0.0, 0.0));
//! ```

pub mod atom;
pub mod molecule;
pub mod topology;
pub mod units;
pub mod view;
