//! # Workflows Module
//!
//! High-level entry points that tie the [`engine`](crate::engine) and
//! [`core`](crate::core) layers together.
//!
//! - **Perception** ([`perceive`]) - Connectivity followed by bond order refinement for
//!   any [`AtomView`](crate::core::models::view::AtomView)
//! - **Conversion** ([`convert`]) - Perception followed by MOL (V2000) export
//!
//! A refinement that hits its iteration cap is not an error: the returned
//! [`BondProfile`](crate::engine::state::BondProfile) carries the outcome, and a warning
//! is logged.

pub mod convert;
mod error;
pub mod perceive;

pub use error::WorkflowError;
