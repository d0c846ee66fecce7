//! The target ball and its hit/timeout state machine.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use aileron_math::{Ray, Sphere};

use crate::bounds::SpawnBounds;
use crate::motion::{FlowMotion, FlowPath, MotionPolicy, RepositionBand};

/// Radii below this are clamped up so the bounding sphere stays a sphere.
const MIN_RADIUS: f32 = 1e-4;

/// Timing and placement parameters for the ball.
#[derive(Clone, Debug)]
pub struct BallParams {
    /// Bounding radius of the ball.
    pub radius: f32,
    /// Seconds of continuous intersection required to score a hit.
    pub hit_window: f32,
    /// Seconds without a completed hit before the ball relocates itself.
    pub chase_timeout: f32,
    /// Whether the chase timeout is armed at all.
    pub timeout_enabled: bool,
    /// Volume repositions sample from.
    pub bounds: SpawnBounds,
    /// Motion policy the ball starts with.
    pub policy: MotionPolicy,
    /// RNG seed; runs with equal seeds and inputs reposition identically.
    pub seed: u64,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            hit_window: 1.0,
            chase_timeout: 2.0,
            timeout_enabled: false,
            bounds: SpawnBounds::default(),
            policy: MotionPolicy::default(),
            seed: 7,
        }
    }
}

/// What happened to the ball during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BallTick {
    /// The detection ray crossed the ball this tick.
    pub intersecting: bool,
    /// The hit window filled up: a hit was scored and the ball relocated.
    pub hit_completed: bool,
    /// The chase timeout expired and forced a relocation.
    pub timed_out: bool,
}

/// The ball the player chases with the vehicle's nose ray.
///
/// Holding the ray on the ball for the whole hit window scores a hit and
/// relocates the ball; letting the chase timer expire (when enabled)
/// relocates it without scoring. Flow mode drifts the ball along random
/// curves instead of teleporting.
#[derive(Clone, Debug)]
pub struct BallTarget {
    position: Vec3,
    radius: f32,
    hit_timer: f32,
    chase_timer: f32,
    hit_count: u32,
    intersecting: bool,
    hit_window: f32,
    chase_timeout: f32,
    timeout_enabled: bool,
    bounds: SpawnBounds,
    policy: MotionPolicy,
    rng: ChaCha8Rng,
}

impl BallTarget {
    pub fn new(params: BallParams) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let position = params.bounds.sample_uniform(&mut rng);
        Self {
            position,
            radius: params.radius.max(MIN_RADIUS),
            hit_timer: 0.0,
            chase_timer: 0.0,
            hit_count: 0,
            intersecting: false,
            hit_window: params.hit_window,
            chase_timeout: params.chase_timeout,
            timeout_enabled: params.timeout_enabled,
            bounds: params.bounds,
            policy: params.policy,
            rng,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Bounding sphere at the current position.
    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }

    /// Hits scored so far. Monotonically increasing.
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// Whether the ray was on the ball last tick.
    pub fn intersecting(&self) -> bool {
        self.intersecting
    }

    /// Fraction of the hit window accumulated, clamped to `[0, 1]`.
    /// Drives on-target feedback like a fill gradient.
    pub fn hit_progress(&self) -> f32 {
        if self.hit_window > 0.0 {
            (self.hit_timer / self.hit_window).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Seconds since the last completed hit or forced relocation.
    pub fn chase_timer(&self) -> f32 {
        self.chase_timer
    }

    /// Change the bounding radius. Values at or below zero clamp to a small
    /// positive minimum.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(MIN_RADIUS);
    }

    /// Swap the motion policy in place. The position is kept; a flowing
    /// ball starts a fresh curve from wherever it is.
    pub fn set_policy(&mut self, policy: MotionPolicy) {
        self.policy = policy;
    }

    /// Advance the ball one fixed tick against the vehicle's detection ray.
    ///
    /// Order matters and is load-bearing:
    /// 1. The chase timeout is resolved first. When it fires, the ball has
    ///    already moved before the intersection test below, so a tick can
    ///    never count as both a timeout and a hit.
    /// 2. The ray is tested against the (possibly relocated) ball.
    /// 3. The hit timer accumulates while intersecting and resets the
    ///    instant contact is lost; filling the window scores exactly one
    ///    hit and relocates the ball.
    /// 4. Flow motion advances regardless of all of the above.
    pub fn evaluate(&mut self, ray: &Ray, dt: f32) -> BallTick {
        let mut tick = BallTick::default();

        self.chase_timer += dt;
        if self.timeout_enabled && self.chase_timer > self.chase_timeout {
            self.relocate_for_timeout();
            self.chase_timer = 0.0;
            self.hit_timer = 0.0;
            tick.timed_out = true;
        }

        self.intersecting = ray.intersects_sphere(&self.sphere());
        tick.intersecting = self.intersecting;

        if self.intersecting {
            self.hit_timer += dt;
            if self.hit_timer > self.hit_window {
                self.hit_count += 1;
                self.hit_timer = 0.0;
                self.chase_timer = 0.0;
                self.relocate_for_hit();
                tick.hit_completed = true;
                debug!(hits = self.hit_count, "hit window completed");
            }
        } else {
            self.hit_timer = 0.0;
        }

        self.advance_flow(dt);
        tick
    }

    /// Hit relocation honors the policy's band; flow never snaps.
    fn relocate_for_hit(&mut self) {
        match &mut self.policy {
            MotionPolicy::Snap(RepositionBand::Uniform) => {
                self.position = self.bounds.sample_uniform(&mut self.rng);
            }
            MotionPolicy::Snap(RepositionBand::High) => {
                self.position = self.bounds.sample_high_band(&mut self.rng);
            }
            MotionPolicy::Flow(flow) => {
                flow.path = None;
            }
        }
    }

    /// Timeouts always force the high-value placement; a flowing ball
    /// instead abandons its curve and starts a new one from where it is.
    fn relocate_for_timeout(&mut self) {
        match &mut self.policy {
            MotionPolicy::Snap(_) => {
                self.position = self.bounds.sample_high_band(&mut self.rng);
                debug!(position = ?self.position, "chase timeout, ball relocated");
            }
            MotionPolicy::Flow(flow) => {
                flow.path = None;
                debug!("chase timeout, flow path regenerated");
            }
        }
    }

    fn advance_flow(&mut self, dt: f32) {
        let MotionPolicy::Flow(flow) = &mut self.policy else {
            return;
        };

        let needs_new_path = match &flow.path {
            None => true,
            Some(path) => path.finished(),
        };
        if needs_new_path {
            let path = FlowPath::generate(
                self.position,
                &self.bounds,
                flow.speed,
                flow.wander,
                &mut self.rng,
            );
            flow.path = Some(path);
        }
        if let Some(path) = &mut flow.path {
            self.position = path.advance(dt);
        }
    }

    /// Direct access to the flow state when the policy is flowing.
    pub fn flow(&self) -> Option<&FlowMotion> {
        match &self.policy {
            MotionPolicy::Flow(flow) => Some(flow),
            MotionPolicy::Snap(_) => None,
        }
    }
}

impl Default for BallTarget {
    fn default() -> Self {
        Self::new(BallParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const DT: f32 = 0.1;

    /// A ray pinned straight at the ball's current position.
    fn ray_at(ball: &BallTarget) -> Ray {
        Ray::new(ball.position() + Vec3::new(0.0, 0.0, 30.0), Vec3::NEG_Z)
    }

    /// A ray guaranteed to miss everything inside the default bounds.
    fn ray_away() -> Ray {
        Ray::new(Vec3::new(500.0, 500.0, 500.0), Vec3::Y)
    }

    fn params() -> BallParams {
        BallParams {
            timeout_enabled: false,
            ..BallParams::default()
        }
    }

    #[test]
    fn test_hit_scores_on_the_tick_that_fills_the_window() {
        let mut ball = BallTarget::new(params());
        // Window 1.0 at dt 0.1: nine ticks accumulate, the tenth crosses.
        for i in 0..9 {
            let tick = ball.evaluate(&ray_at(&ball), DT);
            assert!(tick.intersecting);
            assert!(!tick.hit_completed, "hit fired early on tick {i}");
            assert_eq!(ball.hit_count(), 0);
        }
        let tick = ball.evaluate(&ray_at(&ball), DT);
        assert!(tick.hit_completed);
        assert_eq!(ball.hit_count(), 1);
        assert_eq!(ball.hit_progress(), 0.0, "hit timer resets with the score");
    }

    #[test]
    fn test_losing_contact_resets_hit_timer_only() {
        let mut ball = BallTarget::new(params());
        for _ in 0..5 {
            ball.evaluate(&ray_at(&ball), DT);
        }
        assert!(ball.hit_progress() > 0.4);
        let chase_before = ball.chase_timer();

        let tick = ball.evaluate(&ray_away(), DT);
        assert!(!tick.intersecting);
        assert_eq!(ball.hit_progress(), 0.0);
        assert_eq!(ball.hit_count(), 0);
        assert!(ball.chase_timer() > chase_before, "chase timer keeps running");
    }

    #[test]
    fn test_hit_relocates_the_ball() {
        let mut ball = BallTarget::new(params());
        let before = ball.position();
        for _ in 0..11 {
            ball.evaluate(&ray_at(&ball), DT);
            if ball.hit_count() > 0 {
                break;
            }
        }
        assert_eq!(ball.hit_count(), 1);
        assert_ne!(ball.position(), before);
        assert!(SpawnBounds::default().contains(ball.position()));
    }

    #[test]
    fn test_timeout_fires_and_resets_chase_timer() {
        let mut ball = BallTarget::new(BallParams {
            timeout_enabled: true,
            ..params()
        });
        let mut timed_out = false;
        // 2.1 seconds without contact at the 2.0 s timeout.
        for _ in 0..21 {
            let tick = ball.evaluate(&ray_away(), DT);
            timed_out |= tick.timed_out;
        }
        assert!(timed_out, "timeout never fired");
        assert!(ball.chase_timer() < 2.0);
        assert_eq!(ball.hit_count(), 0, "timeouts do not score");
    }

    #[test]
    fn test_timeout_places_ball_in_high_band() {
        let mut ball = BallTarget::new(BallParams {
            timeout_enabled: true,
            ..params()
        });
        for _ in 0..21 {
            ball.evaluate(&ray_away(), DT);
        }
        let band = SpawnBounds::default().high_band();
        assert!(
            band.contains(ball.position()),
            "{:?} outside the high band {band:?}",
            ball.position()
        );
    }

    #[test]
    fn test_timeout_disabled_never_relocates() {
        let mut ball = BallTarget::new(params());
        let start = ball.position();
        for _ in 0..100 {
            let tick = ball.evaluate(&ray_away(), DT);
            assert!(!tick.timed_out);
        }
        assert_eq!(ball.position(), start);
        assert!(ball.chase_timer() > 9.0, "timer still accumulates silently");
    }

    #[test]
    fn test_timeout_beats_hit_on_the_same_tick() {
        // Arrange both timers to trip on the same evaluate call: the
        // timeout must fire, the hit must not, because the ball has moved
        // before the intersection test.
        let mut ball = BallTarget::new(BallParams {
            timeout_enabled: true,
            chase_timeout: 1.0,
            hit_window: 0.95,
            ..params()
        });
        // Even if the relocated ball happens to sit on the old ray, the
        // timeout has already zeroed the hit timer, so one tick of contact
        // cannot fill the window.
        let mut last = BallTick::default();
        for _ in 0..10 {
            last = ball.evaluate(&ray_at(&ball), DT);
            if last.timed_out {
                break;
            }
        }
        assert!(last.timed_out, "timeout should have tripped");
        assert!(!last.hit_completed, "timeout and hit must not share a tick");
        assert_eq!(ball.hit_count(), 0);
    }

    #[test]
    fn test_high_band_policy_relocates_high_on_hits() {
        let mut ball = BallTarget::new(BallParams {
            policy: MotionPolicy::Snap(RepositionBand::High),
            ..params()
        });
        for _ in 0..11 {
            ball.evaluate(&ray_at(&ball), DT);
            if ball.hit_count() > 0 {
                break;
            }
        }
        assert_eq!(ball.hit_count(), 1);
        assert!(SpawnBounds::default().high_band().contains(ball.position()));
    }

    #[test]
    fn test_flow_ball_moves_every_tick_without_hits() {
        let mut ball = BallTarget::new(BallParams {
            policy: MotionPolicy::Flow(FlowMotion::default()),
            ..params()
        });
        let mut previous = ball.position();
        let mut moved_ticks = 0u32;
        for _ in 0..100 {
            ball.evaluate(&ray_away(), DT);
            if ball.position() != previous {
                moved_ticks += 1;
            }
            previous = ball.position();
        }
        assert!(moved_ticks > 90, "flowing ball should drift continuously");
        assert_eq!(ball.hit_count(), 0);
    }

    #[test]
    fn test_flow_hit_does_not_teleport() {
        let mut ball = BallTarget::new(BallParams {
            policy: MotionPolicy::Flow(FlowMotion::new(0.5, 2.0)),
            ..params()
        });
        // Chase the ball every tick; when the hit lands, the ball must not
        // jump, only change course.
        let mut hit_tick_jump = None;
        for _ in 0..200 {
            let before = ball.position();
            let tick = ball.evaluate(&ray_at(&ball), DT);
            if tick.hit_completed {
                hit_tick_jump = Some(ball.position().distance(before));
                break;
            }
        }
        let jump = hit_tick_jump.expect("hit never completed");
        // One tick of drift at 0.5 units/s moves a fraction of a unit; a
        // snap would cross a large share of the 30-unit bounds.
        assert!(jump < 2.0, "flow mode teleported {jump} units on a hit");
        assert_eq!(ball.hit_count(), 1);
    }

    #[test]
    fn test_equal_seeds_reposition_identically() {
        let mut a = BallTarget::new(params());
        let mut b = BallTarget::new(params());
        assert_eq!(a.position(), b.position());
        for _ in 0..40 {
            let ray_a = ray_at(&a);
            let ray_b = ray_at(&b);
            a.evaluate(&ray_a, DT);
            b.evaluate(&ray_b, DT);
            assert_eq!(a.position(), b.position());
            assert_eq!(a.hit_count(), b.hit_count());
        }
    }

    #[test]
    fn test_hit_progress_ramps_and_clamps() {
        let mut ball = BallTarget::new(params());
        assert_eq!(ball.hit_progress(), 0.0);
        ball.evaluate(&ray_at(&ball), DT);
        let early = ball.hit_progress();
        ball.evaluate(&ray_at(&ball), DT);
        assert!(ball.hit_progress() > early);
        assert!(ball.hit_progress() <= 1.0);
    }

    #[test]
    fn test_degenerate_radius_is_clamped() {
        let ball = BallTarget::new(BallParams {
            radius: 0.0,
            ..params()
        });
        assert!(ball.radius() > 0.0);
        let mut ball = ball;
        ball.set_radius(-3.0);
        assert!(ball.radius() > 0.0);
    }

    #[test]
    fn test_degenerate_hit_window_cycles_without_faulting() {
        let mut ball = BallTarget::new(BallParams {
            hit_window: 0.0,
            ..params()
        });
        for _ in 0..20 {
            let tick = ball.evaluate(&ray_at(&ball), DT);
            assert!(tick.hit_completed, "zero window completes every contact tick");
        }
        assert_eq!(ball.hit_count(), 20);
        assert!(ball.position().is_finite());
    }
}
