//! # raceline-collision
//!
//! The static collision surface: terrain height, normal, and material
//! queries against the track's collidable triangle set.
//!
//! Construction happens once per track load:
//! 1. **Filter** — only triangles tagged collidable are kept
//! 2. **Bin** — triangles are indexed into a uniform track-plane grid
//! 3. **Query** — a vertical ray per call, tested against one grid cell
//!
//! After construction the surface is immutable; all queries take
//! `&self` and are safe to issue concurrently from parallel
//! simulation steps.

pub mod raycast;
pub mod surface;

pub use surface::{CollisionSurface, TerrainInfo};
