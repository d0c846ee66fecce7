//! Angular-velocity based rotation integration with per-axis tuning.
//!
//! Control inputs accelerate an angular velocity vector (pitch = x, yaw = y,
//! roll = z), drag decays it, and the clamped result is folded into the
//! orientation quaternion each tick.

use glam::{Quat, Vec3};

/// Extra input authority on the roll axis relative to pitch/yaw.
pub const ROLL_SPEED_BIAS: f32 = 1.15;
/// Extra angular-velocity headroom on the roll axis.
pub const ROLL_MAX_BIAS: f32 = 1.2;

/// Angular velocities with a squared magnitude below this snap to exact zero
/// so a drifting vehicle comes to a true rest instead of creeping forever.
pub const ANGULAR_REST_THRESHOLD: f32 = 1e-3;

/// Tuning for a single rotation axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTuning {
    /// Angular acceleration per unit input, in rad/s².
    pub rotation_speed: f32,
    /// Per-tick exponential decay factor in `(0, 1]`. 1.0 disables drag.
    pub drag_coefficient: f32,
    /// Angular velocity clamp in rad/s.
    pub max_rotation_speed: f32,
}

impl AxisTuning {
    pub fn new(rotation_speed: f32, drag_coefficient: f32, max_rotation_speed: f32) -> Self {
        Self {
            rotation_speed,
            drag_coefficient,
            max_rotation_speed,
        }
    }
}

impl Default for AxisTuning {
    fn default() -> Self {
        Self {
            rotation_speed: 21.0,
            drag_coefficient: 0.975,
            max_rotation_speed: 10.0,
        }
    }
}

/// Per-axis tuning triple: pitch (x), yaw (y), roll (z).
///
/// Each axis carries its own acceleration, drag, and clamp so asymmetric
/// handling (a faster roll axis, say) is data, not a special case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTuning {
    pub pitch: AxisTuning,
    pub yaw: AxisTuning,
    pub roll: AxisTuning,
}

impl RotationTuning {
    /// Build a triple from uniform scalars, applying the roll-axis biases.
    pub fn from_scalars(
        rotation_speed: f32,
        drag_coefficient: f32,
        max_rotation_speed: f32,
    ) -> Self {
        let base = AxisTuning::new(rotation_speed, drag_coefficient, max_rotation_speed);
        Self {
            pitch: base,
            yaw: base,
            roll: AxisTuning::new(
                rotation_speed * ROLL_SPEED_BIAS,
                drag_coefficient,
                max_rotation_speed * ROLL_MAX_BIAS,
            ),
        }
    }

    fn rotation_speeds(&self) -> Vec3 {
        Vec3::new(
            self.pitch.rotation_speed,
            self.yaw.rotation_speed,
            self.roll.rotation_speed,
        )
    }

    fn drag_coefficients(&self) -> Vec3 {
        Vec3::new(
            self.pitch.drag_coefficient,
            self.yaw.drag_coefficient,
            self.roll.drag_coefficient,
        )
    }

    fn max_rotation_speeds(&self) -> Vec3 {
        Vec3::new(
            self.pitch.max_rotation_speed,
            self.yaw.max_rotation_speed,
            self.roll.max_rotation_speed,
        )
    }
}

impl Default for RotationTuning {
    fn default() -> Self {
        let base = AxisTuning::default();
        Self::from_scalars(
            base.rotation_speed,
            base.drag_coefficient,
            base.max_rotation_speed,
        )
    }
}

/// Named handling presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationPreset {
    /// Stock handling: moderate acceleration, light drag.
    #[default]
    Standard,
    /// Near-instant response with heavy drag; rotation dies almost as soon
    /// as input is released.
    Snappy,
}

impl RotationPreset {
    pub fn tuning(self) -> RotationTuning {
        match self {
            Self::Standard => RotationTuning::from_scalars(21.0, 0.975, 10.0),
            Self::Snappy => RotationTuning::from_scalars(100.0, 0.88, 10.0),
        }
    }
}

/// Integrates control inputs into angular velocity and orientation.
#[derive(Clone, Debug)]
pub struct RotationIntegrator {
    angular_velocity: Vec3,
    orientation: Quat,
    /// Live tuning; safe to mutate between ticks.
    pub tuning: RotationTuning,
}

impl RotationIntegrator {
    pub fn new(tuning: RotationTuning) -> Self {
        Self {
            angular_velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            tuning,
        }
    }

    /// Current angular velocity in rad/s (pitch, yaw, roll).
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Current orientation. Unit length by construction.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Zero the angular velocity and reset the orientation, keeping tuning.
    pub fn reset(&mut self) {
        self.angular_velocity = Vec3::ZERO;
        self.orientation = Quat::IDENTITY;
    }

    /// Advance one tick and return the incremental rotation that was applied.
    ///
    /// Inputs are unitless deflections in `[-1, 1]`; out-of-range and
    /// non-finite values are clamped. The input vector is renormalized when
    /// its magnitude exceeds 1 so diagonal deflection never outruns a single
    /// axis.
    pub fn integrate(&mut self, pitch: f32, yaw: f32, roll: f32, dt: f32) -> Quat {
        let mut input = Vec3::new(clamp_input(pitch), clamp_input(yaw), clamp_input(roll));
        if input.length_squared() > 1.0 {
            input = input.normalize();
        }

        self.angular_velocity += input * self.tuning.rotation_speeds() * dt;

        // Drag decays the velocity every tick, input or not.
        self.angular_velocity *= self.tuning.drag_coefficients();

        if self.angular_velocity.length_squared() < ANGULAR_REST_THRESHOLD {
            self.angular_velocity = Vec3::ZERO;
        }

        let max = self.tuning.max_rotation_speeds();
        self.angular_velocity = self.angular_velocity.clamp(-max, max);

        // Body-frame increment, composed pitch then yaw then roll. Roll is
        // negated: positive roll input turns clockwise seen from behind.
        let step = self.angular_velocity * dt;
        let delta = Quat::from_rotation_x(step.x)
            * Quat::from_rotation_y(step.y)
            * Quat::from_rotation_z(-step.z);
        self.orientation = (self.orientation * delta).normalize();
        delta
    }
}

impl Default for RotationIntegrator {
    fn default() -> Self {
        Self::new(RotationTuning::default())
    }
}

fn clamp_input(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Uniform tuning without the roll biases, for axis-symmetric tests.
    fn uniform(speed: f32, drag: f32, max: f32) -> RotationTuning {
        let axis = AxisTuning::new(speed, drag, max);
        RotationTuning {
            pitch: axis,
            yaw: axis,
            roll: axis,
        }
    }

    #[test]
    fn test_orientation_stays_unit_length() {
        let mut integrator = RotationIntegrator::default();
        let inputs = [
            (1.0, 0.0, 0.0),
            (0.3, -1.0, 0.7),
            (-1.0, 1.0, 1.0),
            (0.0, 0.0, -1.0),
        ];
        for tick in 0..2000 {
            let (p, y, r) = inputs[tick % inputs.len()];
            integrator.integrate(p, y, r, DT);
            let len = integrator.orientation().length();
            assert!((len - 1.0).abs() < 1e-6, "norm drifted to {len} at tick {tick}");
        }
    }

    #[test]
    fn test_zero_input_decays_to_exact_rest() {
        let mut integrator = RotationIntegrator::default();
        for _ in 0..30 {
            integrator.integrate(0.0, 0.0, 1.0, DT);
        }
        let mut previous = integrator.angular_velocity().length();
        assert!(previous > 0.0);

        let mut came_to_rest = false;
        for _ in 0..1000 {
            integrator.integrate(0.0, 0.0, 0.0, DT);
            let current = integrator.angular_velocity().length();
            assert!(current <= previous, "decay must be monotonic");
            previous = current;
            if integrator.angular_velocity() == Vec3::ZERO {
                came_to_rest = true;
                break;
            }
        }
        assert!(came_to_rest, "velocity never snapped to exact zero");
    }

    #[test]
    fn test_angular_velocity_clamps_at_axis_max() {
        // Pitch axis: acceleration 10 rad/s², no drag, clamp at 5 rad/s.
        let mut integrator = RotationIntegrator::new(RotationTuning {
            pitch: AxisTuning::new(10.0, 1.0, 5.0),
            ..RotationTuning::default()
        });
        for _ in 0..10 {
            integrator.integrate(1.0, 0.0, 0.0, 0.1);
        }
        let av = integrator.angular_velocity();
        assert!((av.x - 5.0).abs() < 1e-5, "pitch velocity should sit at the clamp, got {}", av.x);
        assert_eq!(av.y, 0.0);
        assert_eq!(av.z, 0.0);
    }

    #[test]
    fn test_diagonal_input_is_renormalized() {
        let tuning = uniform(10.0, 1.0, 100.0);
        let mut diagonal = RotationIntegrator::new(tuning);
        let mut single = RotationIntegrator::new(tuning);

        diagonal.integrate(1.0, 1.0, 1.0, DT);
        single.integrate(1.0, 0.0, 0.0, DT);

        let d = diagonal.angular_velocity().length();
        let s = single.angular_velocity().length();
        assert!((d - s).abs() < 1e-5, "diagonal {d} should equal single-axis {s}");
    }

    #[test]
    fn test_pitch_up_raises_nose() {
        let mut integrator = RotationIntegrator::default();
        for _ in 0..20 {
            integrator.integrate(1.0, 0.0, 0.0, DT);
        }
        let forward = integrator.orientation() * Vec3::NEG_Z;
        assert!(forward.y > 0.01, "nose should rise, forward = {forward:?}");
    }

    #[test]
    fn test_positive_yaw_turns_nose_left() {
        let mut integrator = RotationIntegrator::default();
        for _ in 0..20 {
            integrator.integrate(0.0, 1.0, 0.0, DT);
        }
        let forward = integrator.orientation() * Vec3::NEG_Z;
        assert!(forward.x < -0.01, "nose should swing toward -X, forward = {forward:?}");
    }

    #[test]
    fn test_positive_roll_is_clockwise_from_behind() {
        let mut integrator = RotationIntegrator::default();
        for _ in 0..20 {
            integrator.integrate(0.0, 0.0, 1.0, DT);
        }
        // Clockwise seen from +Z (behind the vehicle): the up vector tips
        // toward +X while forward stays put.
        let up = integrator.orientation() * Vec3::Y;
        let forward = integrator.orientation() * Vec3::NEG_Z;
        assert!(up.x > 0.01, "up should tip toward +X, up = {up:?}");
        assert!((forward - Vec3::NEG_Z).length() < 1e-3, "pure roll must not move the nose");
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut integrator = RotationIntegrator::default();
        integrator.integrate(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, DT);
        assert!(integrator.angular_velocity().is_finite());
        assert!(integrator.orientation().is_finite());
        assert_eq!(integrator.angular_velocity().x, 0.0);
        assert_eq!(integrator.angular_velocity().y, 0.0);
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        let tuning = uniform(10.0, 1.0, 100.0);
        let mut oversized = RotationIntegrator::new(tuning);
        let mut nominal = RotationIntegrator::new(tuning);
        oversized.integrate(5.0, 0.0, 0.0, DT);
        nominal.integrate(1.0, 0.0, 0.0, DT);
        assert!(
            (oversized.angular_velocity().x - nominal.angular_velocity().x).abs() < 1e-6,
            "input above 1 must behave like full deflection"
        );
    }

    #[test]
    fn test_from_scalars_applies_roll_bias() {
        let tuning = RotationTuning::from_scalars(21.0, 0.975, 10.0);
        assert!((tuning.roll.rotation_speed - 21.0 * ROLL_SPEED_BIAS).abs() < 1e-5);
        assert!((tuning.roll.max_rotation_speed - 10.0 * ROLL_MAX_BIAS).abs() < 1e-5);
        assert!((tuning.pitch.rotation_speed - 21.0).abs() < 1e-6);
        assert!((tuning.roll.drag_coefficient - 0.975).abs() < 1e-6);
    }

    #[test]
    fn test_snappy_preset_accelerates_harder_and_stops_faster() {
        let standard = RotationPreset::Standard.tuning();
        let snappy = RotationPreset::Snappy.tuning();
        assert!(snappy.pitch.rotation_speed > standard.pitch.rotation_speed);
        assert!(snappy.pitch.drag_coefficient < standard.pitch.drag_coefficient);

        let mut a = RotationIntegrator::new(standard);
        let mut b = RotationIntegrator::new(snappy);
        a.integrate(1.0, 0.0, 0.0, DT);
        b.integrate(1.0, 0.0, 0.0, DT);
        assert!(b.angular_velocity().x > a.angular_velocity().x);
    }

    #[test]
    fn test_reset_clears_state_keeps_tuning() {
        let mut integrator = RotationIntegrator::new(RotationPreset::Snappy.tuning());
        for _ in 0..10 {
            integrator.integrate(1.0, 1.0, 0.0, DT);
        }
        integrator.reset();
        assert_eq!(integrator.angular_velocity(), Vec3::ZERO);
        assert_eq!(integrator.orientation(), Quat::IDENTITY);
        assert_eq!(integrator.tuning, RotationPreset::Snappy.tuning());
    }

    #[test]
    fn test_increment_matches_orientation_step() {
        let mut integrator = RotationIntegrator::default();
        integrator.integrate(0.4, -0.2, 0.9, DT);
        let before = integrator.orientation();
        let delta = integrator.integrate(0.4, -0.2, 0.9, DT);
        let after = integrator.orientation();
        let recomposed = (before * delta).normalize();
        // The returned increment is exactly what was folded into the
        // orientation.
        let dot = recomposed.dot(after).abs();
        assert!(dot > 1.0 - 1e-6, "increment mismatch, dot = {dot}");
    }
}
