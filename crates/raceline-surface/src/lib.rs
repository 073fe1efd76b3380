//! # raceline-surface
//!
//! Surface material properties and the named material database.
//!
//! Every collision triangle carries a [`raceline_types::MaterialId`]
//! pointing into a [`SurfaceDatabase`]. Physics reads friction and
//! speed properties from the hit material; the rescue system reads
//! the reset flag (lava, deep water).

pub mod database;
pub mod properties;

pub use database::SurfaceDatabase;
pub use properties::SurfaceProperties;
