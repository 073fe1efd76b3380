//! Vertical ray vs. triangle intersection.
//!
//! Terrain queries only ever cast straight down, so the intersection
//! reduces to a 2D point-in-triangle test in the track plane plus a
//! plane-height evaluation. The barycentric test uses Cramer's rule
//! with a small negative tolerance so points exactly on a shared edge
//! belong to both triangles.

use raceline_math::{Vec2, Vec3};
use raceline_types::constants::DEGENERATE_AREA_THRESHOLD;

/// Result of a vertical ray hitting a triangle.
#[derive(Debug, Clone, Copy)]
pub struct VerticalHit {
    /// Height of the intersection point.
    pub y: f32,
    /// Unit surface normal, oriented upward (away from the ground).
    pub normal: Vec3,
}

/// Barycentric tolerance: slightly outside still counts as inside so
/// shared edges between adjacent triangles never produce a gap.
const BARY_TOL: f32 = -1.0e-4;

/// Intersects the vertical line through `(x, z)` with triangle `abc`.
///
/// Returns `None` for triangles that are degenerate or near-vertical
/// (their track-plane footprint has no area), and for lines whose
/// footprint falls outside the triangle.
pub fn vertical_hit(x: f32, z: f32, a: Vec3, b: Vec3, c: Vec3) -> Option<VerticalHit> {
    let ab = Vec2::new(b.x - a.x, b.z - a.z);
    let ac = Vec2::new(c.x - a.x, c.z - a.z);
    let ap = Vec2::new(x - a.x, z - a.z);

    // 2D cross product = signed footprint area ×2. Near zero means a
    // vertical wall or a degenerate triangle; a vertical ray cannot
    // land on either.
    let denom = ab.x * ac.y - ac.x * ab.y;
    if denom.abs() < DEGENERATE_AREA_THRESHOLD {
        return None;
    }
    let inv_denom = 1.0 / denom;

    let v = (ap.x * ac.y - ac.x * ap.y) * inv_denom;
    let w = (ab.x * ap.y - ap.x * ab.y) * inv_denom;
    let u = 1.0 - v - w;

    if u < BARY_TOL || v < BARY_TOL || w < BARY_TOL {
        return None;
    }

    let y = a.y * u + b.y * v + c.y * w;

    let normal = (b - a).cross(c - a);
    let len = normal.length();
    if len < DEGENERATE_AREA_THRESHOLD {
        return None;
    }
    let mut normal = normal / len;
    if normal.y < 0.0 {
        normal = -normal;
    }

    Some(VerticalHit { y, normal })
}
