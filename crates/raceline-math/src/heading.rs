//! Heading angles in the track plane.
//!
//! A heading is the direction of travel projected onto the (x, z)
//! plane, measured in radians from +z toward +x, in `[-π, π]`.
//! The same convention is used for quad headings, start positions,
//! and wrong-way detection.

use glam::Vec2;

/// Heading from `from` toward `to`, both given as track-plane (x, z)
/// points. Returns 0.0 when the points coincide.
pub fn heading_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d.length_squared() < 1.0e-12 {
        return 0.0;
    }
    d.x.atan2(d.y)
}

/// Smallest signed difference `a - b` between two headings,
/// normalized into `[-π, π]`.
///
/// A large absolute difference between a kart's heading and the
/// track heading at its sector signals driving the wrong way.
pub fn angle_difference(a: f32, b: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut d = (a - b) % TAU;
    if d > PI {
        d -= TAU;
    } else if d < -PI {
        d += TAU;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn heading_along_axes() {
        let o = Vec2::ZERO;
        assert!((heading_between(o, Vec2::new(0.0, 1.0)) - 0.0).abs() < 1e-6);
        assert!((heading_between(o, Vec2::new(1.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((heading_between(o, Vec2::new(-1.0, 0.0)) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn difference_wraps() {
        let d = angle_difference(PI - 0.1, -PI + 0.1);
        assert!((d + 0.2).abs() < 1e-6);
    }
}
