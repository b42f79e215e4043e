//! Provides input/output functionality for molecular file formats.
//!
//! Coordinates enter through the XYZ reader and perceived connection tables leave
//! through the MOL (V2000) writer. Both implement the trait-based interface in
//! [`traits`], which also supplies the path-based convenience methods.

pub mod mol;
pub mod traits;
pub mod xyz;
