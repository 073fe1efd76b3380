//! # raceline-math
//!
//! Geometry primitives for the Raceline track core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, etc.)
//! - 2D axis-aligned bounding box for top-down (minimap) extents
//! - Heading-angle helpers for track-plane directions
//! - A uniform track-plane grid for point-query spatial indexing

pub mod aabb2;
pub mod heading;
pub mod plane_grid;

// Re-export glam types as the canonical math types for Raceline.
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

pub use aabb2::Aabb2;
pub use heading::{angle_difference, heading_between};
pub use plane_grid::PlaneGrid;
