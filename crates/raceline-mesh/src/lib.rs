//! # raceline-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — The core mesh type. Stores positions and topology
//!   in contiguous SoA buffers, with per-triangle surface material and
//!   collidable tagging (drivable terrain vs. pure decoration).
//! - Procedural generators for test tracks (flat planes, ring circuits).

pub mod generators;
pub mod mesh;

pub use mesh::TriangleMesh;
