//! # Core Module
//!
//! The stateless foundation of the library: molecular data models, static element
//! reference data, and file I/O.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, molecules, bonds, length units, and
//!   the [`AtomView`](models::view::AtomView) capability trait consumed by the engine
//! - **Element Data** ([`elements`]) - Covalent radii and expected valences
//! - **File I/O** ([`io`]) - XYZ coordinate input and MOL (V2000) connection-table output
//!
//! Nothing in this module mutates shared state; every lookup table is an immutable
//! compile-time map.

pub mod elements;
pub mod io;
pub mod models;
