//! An oriented quadrilateral cell of the track surface.

use raceline_math::{Vec2, Vec3};

/// Barycentric tolerance for the 2D containment test: points exactly
/// on a shared edge belong to both neighboring quads.
const BARY_TOL: f32 = -1.0e-4;

/// One cell of the drivable surface.
///
/// Corners are ordered around the quad so that consecutive corners
/// share an edge (convex, no bow-ties). The heading is assigned by the
/// graph after adjacency is known: it points from this quad's center
/// toward its default successor.
#[derive(Debug, Clone)]
pub struct Quad {
    corners: [Vec3; 4],
    center: Vec3,
    center2: Vec2,
    min_height: f32,
    max_height: f32,
    heading: f32,
}

impl Quad {
    /// Builds a quad from its four corner positions.
    pub fn new(corners: [Vec3; 4]) -> Self {
        let center = corners.iter().copied().sum::<Vec3>() / 4.0;
        let min_height = corners.iter().map(|c| c.y).fold(f32::MAX, f32::min);
        let max_height = corners.iter().map(|c| c.y).fold(f32::MIN, f32::max);
        Self {
            corners,
            center,
            center2: Vec2::new(center.x, center.z),
            min_height,
            max_height,
            heading: 0.0,
        }
    }

    /// The four corner positions, in winding order.
    pub fn corners(&self) -> &[Vec3; 4] {
        &self.corners
    }

    /// Center of the quad (corner average).
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Track-plane (x, z) center.
    pub fn center_2d(&self) -> Vec2 {
        self.center2
    }

    /// Lowest corner height.
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Highest corner height.
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Heading toward the default successor, radians in `[-π, π]`.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub(crate) fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
    }

    /// Track-plane footprint bounds as `(min, max)`.
    pub fn footprint(&self) -> (Vec2, Vec2) {
        let mut min = Vec2::new(self.corners[0].x, self.corners[0].z);
        let mut max = min;
        for c in &self.corners[1..] {
            let p = Vec2::new(c.x, c.z);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Tests whether the track-plane projection of a point falls
    /// inside this quad's footprint (split into two triangles).
    pub fn contains_2d(&self, p: Vec2) -> bool {
        let c = [
            Vec2::new(self.corners[0].x, self.corners[0].z),
            Vec2::new(self.corners[1].x, self.corners[1].z),
            Vec2::new(self.corners[2].x, self.corners[2].z),
            Vec2::new(self.corners[3].x, self.corners[3].z),
        ];
        point_in_triangle(p, c[0], c[1], c[2]) || point_in_triangle(p, c[0], c[2], c[3])
    }
}

/// 2D point-in-triangle via barycentric coordinates (Cramer's rule).
/// Winding-agnostic; degenerate triangles contain nothing.
fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let denom = ab.x * ac.y - ac.x * ab.y;
    if denom.abs() < 1.0e-10 {
        return false;
    }
    let inv_denom = 1.0 / denom;

    let v = (ap.x * ac.y - ac.x * ap.y) * inv_denom;
    let w = (ab.x * ap.y - ap.x * ab.y) * inv_denom;
    let u = 1.0 - v - w;

    u >= BARY_TOL && v >= BARY_TOL && w >= BARY_TOL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Quad {
        Quad::new([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn containment() {
        let q = unit_quad();
        assert!(q.contains_2d(Vec2::new(0.5, 0.5)));
        assert!(q.contains_2d(Vec2::new(0.0, 0.0))); // corner counts
        assert!(!q.contains_2d(Vec2::new(1.5, 0.5)));
    }

    #[test]
    fn center_and_heights() {
        let q = Quad::new([
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(2.0, 3.0, 2.0),
            Vec3::new(0.0, 2.0, 2.0),
        ]);
        assert!((q.center() - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-6);
        assert_eq!(q.min_height(), 1.0);
        assert_eq!(q.max_height(), 3.0);
    }
}
