//! Ball motion policies: instant snap repositioning and continuous Bézier
//! flow.

use glam::Vec3;
use rand::Rng;

use aileron_math::CubicBezier;

use crate::bounds::SpawnBounds;

/// Durations at or below this are unusable; the path reports finished
/// instead of dividing by zero.
const MIN_PATH_DURATION: f32 = 1e-6;

/// Which part of the bounds snap repositioning samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepositionBand {
    /// Anywhere in the spawn volume.
    #[default]
    Uniform,
    /// Only the narrow high/forward band.
    High,
}

/// How the ball moves between (and instead of) hits.
#[derive(Clone, Debug)]
pub enum MotionPolicy {
    /// Teleport on hit/timeout; stationary otherwise.
    Snap(RepositionBand),
    /// Drift continuously along random Bézier curves; never teleports.
    Flow(FlowMotion),
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self::Snap(RepositionBand::Uniform)
    }
}

/// Parameters and live state for flow-mode drift.
#[derive(Clone, Debug)]
pub struct FlowMotion {
    /// Travel speed along the chord, in units/s.
    pub speed: f32,
    /// Magnitude of the random control-point offsets. Larger values bend
    /// the curves harder.
    pub wander: f32,
    /// Active path; `None` until the first tick generates one.
    pub path: Option<FlowPath>,
}

impl FlowMotion {
    pub fn new(speed: f32, wander: f32) -> Self {
        Self {
            speed,
            wander,
            path: None,
        }
    }
}

impl Default for FlowMotion {
    fn default() -> Self {
        Self::new(4.0, 6.0)
    }
}

/// A cubic Bézier path being traversed at constant parameter rate.
#[derive(Clone, Debug)]
pub struct FlowPath {
    curve: CubicBezier,
    t: f32,
    duration: f32,
}

impl FlowPath {
    /// Generate a fresh path from `from` to a uniform random point in
    /// `bounds`, with control points scattered `wander` units around the
    /// endpoints.
    ///
    /// The duration comes from the chord length over `speed`; degenerate
    /// speeds or chords produce an already-finished path.
    pub fn generate<R: Rng>(
        from: Vec3,
        bounds: &SpawnBounds,
        speed: f32,
        wander: f32,
        rng: &mut R,
    ) -> Self {
        let destination = bounds.sample_uniform(rng);
        let curve = CubicBezier::new(
            from,
            from + random_unit_direction(rng) * wander,
            destination + random_unit_direction(rng) * wander,
            destination,
        );

        let duration = if speed > 0.0 {
            curve.chord_length() / speed
        } else {
            0.0
        };
        let duration = if duration.is_finite() { duration } else { 0.0 };

        Self {
            curve,
            t: 0.0,
            duration,
        }
    }

    /// Advance by `dt` seconds and return the new position on the curve.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        if self.duration > MIN_PATH_DURATION {
            self.t += dt / self.duration;
        } else {
            self.t = 1.0;
        }
        self.curve.evaluate(self.t.min(1.0))
    }

    /// Whether the end of the curve has been reached.
    pub fn finished(&self) -> bool {
        self.t >= 1.0
    }

    /// Where this path ends.
    pub fn destination(&self) -> Vec3 {
        self.curve.p3
    }
}

/// Uniform random direction on the unit sphere.
fn random_unit_direction<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.random::<f32>() * std::f32::consts::TAU;
    let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(9)
    }

    #[test]
    fn test_path_starts_at_origin_point() {
        let mut rng = rng();
        let from = Vec3::new(1.0, 5.0, -2.0);
        let mut path = FlowPath::generate(from, &SpawnBounds::default(), 4.0, 6.0, &mut rng);
        // First advance with dt 0 stays exactly at the start.
        assert_eq!(path.advance(0.0), from);
    }

    #[test]
    fn test_path_reaches_destination_and_finishes() {
        let mut rng = rng();
        let bounds = SpawnBounds::default();
        let mut path = FlowPath::generate(Vec3::ZERO, &bounds, 4.0, 6.0, &mut rng);
        let destination = path.destination();
        assert!(bounds.contains(destination));

        let mut last = Vec3::ZERO;
        for _ in 0..100_000 {
            last = path.advance(1.0 / 60.0);
            if path.finished() {
                break;
            }
        }
        assert!(path.finished(), "path never completed");
        assert_eq!(last, destination, "a finished path sits exactly on p3");
    }

    #[test]
    fn test_zero_speed_path_is_born_finished() {
        let mut rng = rng();
        let mut path = FlowPath::generate(Vec3::ZERO, &SpawnBounds::default(), 0.0, 6.0, &mut rng);
        let p = path.advance(1.0 / 60.0);
        assert!(path.finished());
        assert_eq!(p, path.destination());
    }

    #[test]
    fn test_degenerate_chord_is_born_finished() {
        let mut rng = rng();
        let point = Vec3::new(2.0, 3.0, 4.0);
        let bounds = SpawnBounds::new(point, point);
        let mut path = FlowPath::generate(point, &bounds, 4.0, 0.0, &mut rng);
        path.advance(1.0 / 60.0);
        assert!(path.finished());
    }

    #[test]
    fn test_faster_speed_finishes_sooner() {
        let bounds = SpawnBounds::default();
        let mut slow = FlowPath::generate(Vec3::ZERO, &bounds, 2.0, 6.0, &mut rng());
        let mut fast = FlowPath::generate(Vec3::ZERO, &bounds, 8.0, 6.0, &mut rng());
        // Same seed, same curve; only the traversal rate differs.
        assert_eq!(slow.destination(), fast.destination());

        let mut slow_ticks = 0u32;
        let mut fast_ticks = 0u32;
        while !fast.finished() && fast_ticks < 100_000 {
            fast.advance(1.0 / 60.0);
            fast_ticks += 1;
        }
        while !slow.finished() && slow_ticks < 100_000 {
            slow.advance(1.0 / 60.0);
            slow_ticks += 1;
        }
        assert!(fast_ticks < slow_ticks);
    }

    #[test]
    fn test_random_directions_are_unit_length() {
        let mut rng = rng();
        for _ in 0..100 {
            let dir = random_unit_direction(&mut rng);
            assert!((dir.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_default_policy_is_uniform_snap() {
        match MotionPolicy::default() {
            MotionPolicy::Snap(RepositionBand::Uniform) => {}
            other => panic!("unexpected default policy: {other:?}"),
        }
    }
}
