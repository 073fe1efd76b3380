//! # raceline-graph
//!
//! The directed quad graph and driveline data describing a track's
//! drivable path.
//!
//! ## Key Types
//!
//! - [`Quad`] — An oriented quadrilateral cell of the track surface.
//! - [`QuadGraph`] — Dense-index adjacency graph over quads: successor
//!   enumeration (with branches), nearest-sector lookup, per-node
//!   headings. Cyclic for circuits, acyclic for arenas.
//! - [`Driveline`] — Center/left/right polylines with arc length,
//!   bounds, and the precomputed minimap projection scale.
//!
//! Both structures are immutable after construction and safe for
//! unsynchronized concurrent reads.

pub mod driveline;
pub mod graph;
pub mod quad;

pub use driveline::{Driveline, MiniMapPaths};
pub use graph::{Chaining, QuadGraph};
pub use quad::Quad;
