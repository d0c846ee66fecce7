//! Chase camera with target-locked and free-look follow modes.

use glam::{Quat, Vec3};
use tracing::debug;

use aileron_math::{lerp_factor, weighted_lerp};

/// What the camera keeps in frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FollowMode {
    /// Orbit behind the vehicle so the target ball stays centered.
    #[default]
    TargetLocked,
    /// Sit behind the vehicle's own nose, with loose per-axis smoothing.
    Free,
}

/// Camera placement and smoothing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    /// Vertical field of view in degrees. Pass-through for the renderer;
    /// the follow logic never reads it.
    pub fov_degrees: f32,
    /// Distance behind the vehicle along the look direction.
    pub distance: f32,
    /// Height offset above the vehicle.
    pub height: f32,
    /// Uniform smoothing rate (per second) for target-locked follow and for
    /// the look-at point in both modes.
    pub lock_rate: f32,
    /// Per-axis exponential weights for free-mode position smoothing.
    pub free_weights: Vec3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            distance: 6.0,
            height: 4.0,
            lock_rate: 1.0,
            free_weights: Vec3::new(0.5, 0.2, 0.5),
        }
    }
}

/// A finished camera pose for the render step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Smoothly follows the vehicle, looking either at the target or along the
/// vehicle's nose.
///
/// Both the position and the look-at point are stored and independently
/// smoothed, so mode switches glide instead of snapping.
#[derive(Clone, Debug)]
pub struct FollowCamera {
    position: Vec3,
    look_at: Vec3,
    /// Last valid look direction; reused when the target collapses onto the
    /// vehicle position.
    last_look_dir: Vec3,
    pub mode: FollowMode,
    pub params: CameraParams,
}

/// Where the camera starts before the first update settles it.
const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 3.0, 7.0);

impl FollowCamera {
    pub fn new(mode: FollowMode, params: CameraParams) -> Self {
        Self {
            position: INITIAL_POSITION,
            look_at: Vec3::ZERO,
            last_look_dir: Vec3::NEG_Z,
            mode,
            params,
        }
    }

    /// Current smoothed world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current smoothed look-at point.
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Flip between the two follow modes.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FollowMode::TargetLocked => FollowMode::Free,
            FollowMode::Free => FollowMode::TargetLocked,
        };
        debug!(mode = ?self.mode, "camera follow mode switched");
    }

    /// Advance the camera one frame.
    ///
    /// `dt` is the variable wall-clock frame delta, not the fixed physics
    /// step; both smoothing paths are frame-rate independent. A zero `dt`
    /// leaves the pose untouched. Negative deltas are treated as zero.
    pub fn update(
        &mut self,
        vehicle_position: Vec3,
        vehicle_orientation: Quat,
        target_position: Vec3,
        dt: f32,
    ) -> CameraPose {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let (look_dir, desired_look) = match self.mode {
            FollowMode::TargetLocked => {
                let to_target = target_position - vehicle_position;
                let dir = if to_target.length_squared() > 1e-12 {
                    to_target.normalize()
                } else {
                    self.last_look_dir
                };
                (dir, target_position)
            }
            FollowMode::Free => {
                let dir = vehicle_orientation * Vec3::NEG_Z;
                (dir, vehicle_position + Vec3::Y * self.params.height)
            }
        };
        self.last_look_dir = look_dir;

        let desired_position =
            vehicle_position - look_dir * self.params.distance + Vec3::Y * self.params.height;

        match self.mode {
            FollowMode::TargetLocked => {
                let t = lerp_factor(self.params.lock_rate, dt);
                self.position = self.position.lerp(desired_position, t);
            }
            FollowMode::Free => {
                self.position =
                    weighted_lerp(self.position, desired_position, self.params.free_weights, dt);
            }
        }

        // The look-at point always blends at the uniform rate, regardless of
        // mode.
        let look_t = lerp_factor(self.params.lock_rate, dt);
        self.look_at = self.look_at.lerp(desired_look, look_t);

        CameraPose {
            position: self.position,
            look_at: self.look_at,
        }
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(FollowMode::default(), CameraParams::default())
    }
}
