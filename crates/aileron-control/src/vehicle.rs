//! The trainer vehicle: rotation integrator, spin feedback, and chase camera
//! composed behind one per-tick surface.

use glam::{Quat, Vec3};

use aileron_input::FlightInputs;
use aileron_math::Ray;

use crate::follow_camera::{CameraParams, CameraPose, FollowCamera, FollowMode};
use crate::rotation::{RotationIntegrator, RotationTuning};
use crate::rotation_axis::{AxisIndicator, RotationAxis, axis_indicator, rotation_axis_of};

/// A vehicle rotating in place under flight-control input.
///
/// Translation is out of scope for the trainer; the position is fixed unless
/// the host moves it.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// World position. The trainer keeps the vehicle at the origin.
    pub position: Vec3,
    integrator: RotationIntegrator,
    camera: FollowCamera,
    rotation_axis: RotationAxis,
    indicator: AxisIndicator,
    indicator_scale: f32,
}

impl Vehicle {
    pub fn new(tuning: RotationTuning, camera_mode: FollowMode, camera_params: CameraParams) -> Self {
        Self {
            position: Vec3::ZERO,
            integrator: RotationIntegrator::new(tuning),
            camera: FollowCamera::new(camera_mode, camera_params),
            rotation_axis: RotationAxis::default(),
            indicator: AxisIndicator::default(),
            indicator_scale: 1.0,
        }
    }

    /// Base scale for the spin indicator ring.
    pub fn set_indicator_scale(&mut self, scale: f32) {
        self.indicator_scale = scale;
    }

    /// Integrate one fixed tick of control input and refresh the spin
    /// feedback derived from the resulting increment.
    pub fn apply_inputs(&mut self, inputs: FlightInputs, dt: f32) {
        let delta = self
            .integrator
            .integrate(inputs.pitch, inputs.yaw, inputs.roll, dt);
        self.rotation_axis = rotation_axis_of(delta);
        self.indicator = axis_indicator(&self.rotation_axis, self.indicator_scale);
    }

    /// Detection ray from the vehicle position along its nose.
    pub fn forward_ray(&self) -> Ray {
        Ray::new(self.position, self.orientation() * Vec3::NEG_Z)
    }

    /// Advance the chase camera with the variable frame delta.
    pub fn update_camera(&mut self, target_position: Vec3, frame_dt: f32) -> CameraPose {
        self.camera
            .update(self.position, self.orientation(), target_position, frame_dt)
    }

    pub fn orientation(&self) -> Quat {
        self.integrator.orientation()
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.integrator.angular_velocity()
    }

    /// Instantaneous spin axis from the last tick.
    pub fn rotation_axis(&self) -> &RotationAxis {
        &self.rotation_axis
    }

    /// Ring/line feedback geometry from the last tick.
    pub fn indicator(&self) -> &AxisIndicator {
        &self.indicator
    }

    /// Live rotation tuning.
    pub fn tuning_mut(&mut self) -> &mut RotationTuning {
        &mut self.integrator.tuning
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FollowCamera {
        &mut self.camera
    }

    /// Stop all rotation and return to the rest orientation.
    pub fn reset_rotation(&mut self) {
        self.integrator.reset();
        self.rotation_axis = RotationAxis::default();
        self.indicator = axis_indicator(&self.rotation_axis, self.indicator_scale);
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new(
            RotationTuning::default(),
            FollowMode::default(),
            CameraParams::default(),
        )
    }
}
