//! Bezier curves from the track description.
//!
//! Tracks carry named curves for cinematics (ending cameras, intro
//! fly-bys). The navigation core only stores and evaluates them;
//! the camera system drives the parameter.

use raceline_math::Vec3;

/// A named Bezier curve defined by its control points.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    ident: String,
    control_points: Vec<Vec3>,
}

impl BezierCurve {
    /// Creates a curve. At least one control point is expected; an
    /// empty curve evaluates to the origin.
    pub fn new(ident: impl Into<String>, control_points: Vec<Vec3>) -> Self {
        Self {
            ident: ident.into(),
            control_points,
        }
    }

    /// The curve's identifier from the track file.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The raw control points.
    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    /// Evaluates the curve at `t ∈ [0, 1]` by de Casteljau reduction.
    /// `t` is clamped into the valid range.
    pub fn point_at(&self, t: f32) -> Vec3 {
        if self.control_points.is_empty() {
            return Vec3::ZERO;
        }
        let t = t.clamp(0.0, 1.0);
        let mut points = self.control_points.clone();
        while points.len() > 1 {
            for i in 0..points.len() - 1 {
                points[i] = points[i].lerp(points[i + 1], t);
            }
            points.pop();
        }
        points[0]
    }
}
