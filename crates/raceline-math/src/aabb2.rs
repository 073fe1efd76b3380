//! 2D axis-aligned bounding box.
//!
//! Used for top-down track extents: the minimap scale factors and the
//! uniform grids that index triangles and quads are all driven by a
//! 2D bounds over the track-plane (x, z) projection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in the track plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    /// An empty box that any `grow` call will snap to.
    pub fn empty() -> Self {
        Self {
            min: Vec2::splat(f32::MAX),
            max: Vec2::splat(f32::MIN),
        }
    }

    /// Builds the bounds of a point set. Returns an empty box for an
    /// empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.grow(p);
        }
        aabb
    }

    /// Expands the box to contain `p`.
    pub fn grow(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Returns true if no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width and height of the box. Zero for an empty box.
    pub fn extent(&self) -> Vec2 {
        if self.is_empty() {
            Vec2::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
