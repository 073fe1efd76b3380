//! # raceline-types
//!
//! Shared types, identifiers, error types, and track-space constants
//! for the Raceline track navigation core.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Raceline crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{RacelineError, RacelineResult};
pub use ids::MaterialId;
