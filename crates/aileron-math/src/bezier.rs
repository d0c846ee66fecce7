//! Cubic Bézier curves evaluated with de Casteljau's algorithm.

use glam::Vec3;

/// A cubic Bézier curve over four control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl CubicBezier {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// `t` outside `[0, 1]` is clamped. The endpoints are returned exactly,
    /// so callers can rely on `evaluate(0.0) == p0` and `evaluate(1.0) == p3`
    /// without floating-point drift.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        if !(t > 0.0) {
            return self.p0;
        }
        if t >= 1.0 {
            return self.p3;
        }

        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = self.p2.lerp(self.p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// Straight-line distance between the endpoints.
    ///
    /// A cheap stand-in for arc length when deriving travel durations.
    pub fn chord_length(&self) -> f32 {
        self.p0.distance(self.p3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> CubicBezier {
        CubicBezier::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(2.0, 5.0, -1.0),
            Vec3::new(6.0, -2.0, 3.0),
            Vec3::new(8.0, 1.0, 4.0),
        )
    }

    #[test]
    fn test_endpoints_are_exact() {
        let c = curve();
        assert_eq!(c.evaluate(0.0), c.p0);
        assert_eq!(c.evaluate(1.0), c.p3);
    }

    #[test]
    fn test_out_of_range_t_clamps() {
        let c = curve();
        assert_eq!(c.evaluate(-0.5), c.p0);
        assert_eq!(c.evaluate(2.0), c.p3);
        assert_eq!(c.evaluate(f32::NAN), c.p0);
    }

    #[test]
    fn test_midpoint_matches_bernstein_form() {
        let c = curve();
        let t = 0.5_f32;
        let u = 1.0 - t;
        let expected = c.p0 * (u * u * u)
            + c.p1 * (3.0 * u * u * t)
            + c.p2 * (3.0 * u * t * t)
            + c.p3 * (t * t * t);
        assert!((c.evaluate(t) - expected).length() < 1e-5);
    }

    #[test]
    fn test_straight_control_points_trace_a_line() {
        let c = CubicBezier::new(
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(3.0, 3.0, 3.0),
        );
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let p = c.evaluate(t);
            // Every point must sit on the p0..p3 segment.
            let along = p.dot(Vec3::ONE.normalize());
            let off_axis = p - Vec3::ONE.normalize() * along;
            assert!(off_axis.length() < 1e-5);
        }
    }

    #[test]
    fn test_chord_length() {
        let c = CubicBezier::new(Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::new(3.0, 4.0, 0.0));
        assert!((c.chord_length() - 5.0).abs() < 1e-6);
    }
}
