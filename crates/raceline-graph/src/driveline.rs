//! Driveline polylines, arc length, and minimap projection.
//!
//! The driveline is three parallel ordered point sequences: the center
//! line (mandatory) plus the left and right track edges (optional).
//! Arc length along the center line drives lap-progress distances; the
//! 2D bounds and scale factors are computed once so minimap rendering
//! is a per-point multiply-add, never a per-frame recomputation.

use raceline_math::{Aabb2, Vec2, Vec3};
use raceline_types::constants::{EPSILON, TRACK_2D_HEIGHT, TRACK_2D_WIDTH};
use raceline_types::{RacelineError, RacelineResult};
use tracing::warn;

/// Center/left/right track polylines with derived display data.
#[derive(Debug, Clone)]
pub struct Driveline {
    center: Vec<Vec3>,
    left: Vec<Vec3>,
    right: Vec<Vec3>,
    /// Arc length from the start to each center point. Monotonically
    /// non-decreasing; last entry equals `track_length()`.
    cumulative: Vec<f32>,
    total_distance: f32,
    bounds: Aabb2,
    display: Vec2,
    stretch: bool,
    scale: Vec2,
}

/// Driveline polylines projected into display coordinates.
#[derive(Debug, Clone)]
pub struct MiniMapPaths {
    pub center: Vec<Vec2>,
    /// Empty when the driveline degraded to center-only.
    pub left: Vec<Vec2>,
    /// Empty when the driveline degraded to center-only.
    pub right: Vec<Vec2>,
}

impl Driveline {
    /// Builds a driveline with the default display size and uniform
    /// (non-stretched) scaling.
    pub fn new(
        center: Vec<Vec3>,
        left: Vec<Vec3>,
        right: Vec<Vec3>,
    ) -> RacelineResult<Self> {
        Self::with_display(
            center,
            left,
            right,
            Vec2::new(TRACK_2D_WIDTH, TRACK_2D_HEIGHT),
            false,
        )
    }

    /// Builds a driveline scaled into a `display`-sized rectangle.
    ///
    /// With `stretch` the two axes scale independently to fill the
    /// display; otherwise one uniform factor preserves the track's
    /// aspect ratio.
    ///
    /// The center line must have at least two points. Left/right edges
    /// that are absent or mismatched in length degrade the driveline
    /// to center-only: the minimap skips the edge lines, but this is
    /// never an error.
    pub fn with_display(
        center: Vec<Vec3>,
        mut left: Vec<Vec3>,
        mut right: Vec<Vec3>,
        display: Vec2,
        stretch: bool,
    ) -> RacelineResult<Self> {
        if center.len() < 2 {
            return Err(RacelineError::InvalidDriveline(format!(
                "Center line needs at least 2 points, got {}",
                center.len()
            )));
        }

        let edges_usable = left.len() == center.len() && right.len() == center.len();
        if !edges_usable && (!left.is_empty() || !right.is_empty()) {
            warn!(
                center = center.len(),
                left = left.len(),
                right = right.len(),
                "driveline edge length mismatch, using center line only"
            );
        }
        if !edges_usable {
            left.clear();
            right.clear();
        }

        let mut cumulative = Vec::with_capacity(center.len());
        cumulative.push(0.0);
        let mut total = 0.0f32;
        for pair in center.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }

        let bounds = Aabb2::from_points(center.iter().map(|p| Vec2::new(p.x, p.z)));
        let scale = display_scale(bounds, display, stretch);

        Ok(Self {
            center,
            left,
            right,
            cumulative,
            total_distance: total,
            bounds,
            display,
            stretch,
            scale,
        })
    }

    /// Total arc length of the center line.
    pub fn track_length(&self) -> f32 {
        self.total_distance
    }

    /// Arc length from the start to center point `i`.
    pub fn distance_at(&self, i: usize) -> f32 {
        self.cumulative[i]
    }

    /// The center polyline.
    pub fn center(&self) -> &[Vec3] {
        &self.center
    }

    /// The left edge polyline; empty when degraded to center-only.
    pub fn left(&self) -> &[Vec3] {
        &self.left
    }

    /// The right edge polyline; empty when degraded to center-only.
    pub fn right(&self) -> &[Vec3] {
        &self.right
    }

    /// True when both edge polylines are present.
    pub fn has_edges(&self) -> bool {
        !self.left.is_empty()
    }

    /// Track-plane bounds of the center line.
    pub fn bounds(&self) -> Aabb2 {
        self.bounds
    }

    /// World-to-display scale factors (x, z).
    pub fn scale_factors(&self) -> Vec2 {
        self.scale
    }

    /// The display size the scale factors were computed for.
    pub fn display_size(&self) -> Vec2 {
        self.display
    }

    /// Whether the two display axes scale independently.
    pub fn is_stretched(&self) -> bool {
        self.stretch
    }

    /// Projects the driveline into display space at `offset`, using
    /// the scale precomputed for the configured display size.
    pub fn project_2d(&self, offset: Vec2) -> MiniMapPaths {
        self.project_with(self.scale, offset)
    }

    /// Projects the driveline into an arbitrary display rectangle,
    /// recomputing the fit for that rectangle.
    pub fn project_scaled_2d(&self, x: f32, y: f32, w: f32, h: f32) -> MiniMapPaths {
        let scale = display_scale(self.bounds, Vec2::new(w, h), self.stretch);
        self.project_with(scale, Vec2::new(x, y))
    }

    fn project_with(&self, scale: Vec2, offset: Vec2) -> MiniMapPaths {
        let min = self.bounds.min;
        let project = |line: &[Vec3]| {
            line.iter()
                .map(|p| offset + (Vec2::new(p.x, p.z) - min) * scale)
                .collect()
        };
        MiniMapPaths {
            center: project(&self.center),
            left: project(&self.left),
            right: project(&self.right),
        }
    }
}

/// Fit factors mapping `bounds` into a `display`-sized rectangle.
/// A degenerate axis (straight track along one axis) borrows the
/// other axis' factor so the projection stays finite.
fn display_scale(bounds: Aabb2, display: Vec2, stretch: bool) -> Vec2 {
    let extent = bounds.extent();
    let sx = if extent.x > EPSILON {
        display.x / extent.x
    } else {
        0.0
    };
    let sy = if extent.y > EPSILON {
        display.y / extent.y
    } else {
        0.0
    };

    let (sx, sy) = match (sx > 0.0, sy > 0.0) {
        (true, true) => (sx, sy),
        (true, false) => (sx, sx),
        (false, true) => (sy, sy),
        (false, false) => (1.0, 1.0),
    };

    if stretch {
        Vec2::new(sx, sy)
    } else {
        let uniform = sx.min(sy);
        Vec2::splat(uniform)
    }
}
