//! One training session: the vehicle and the ball, built from loaded
//! settings and advanced together.
//!
//! This module is the only place config enums meet the domain types, so the
//! mapping between a settings file and live objects stays in one seam.

use glam::Vec3;

use aileron_config::{BallMode, CameraMode, Config, InputConfig, StickTopology, TuningPreset};
use aileron_control::{
    CameraParams, CameraPose, FollowMode, RotationPreset, RotationTuning, Vehicle,
};
use aileron_input::{AirRollDirection, DeadzoneTopology, FlightInputs, StickConfig};
use aileron_target::{
    BallParams, BallTarget, BallTick, FlowMotion, MotionPolicy, RepositionBand, SpawnBounds,
};

/// The live simulation: one vehicle chasing one ball.
pub struct Session {
    vehicle: Vehicle,
    ball: BallTarget,
}

impl Session {
    /// Build a session from loaded settings.
    pub fn from_config(config: &Config) -> Self {
        let camera_params = CameraParams {
            fov_degrees: config.camera.fov_degrees,
            distance: config.camera.distance,
            height: config.camera.height,
            ..CameraParams::default()
        };
        let camera_mode = match config.camera.mode {
            CameraMode::TargetLocked => FollowMode::TargetLocked,
            CameraMode::Free => FollowMode::Free,
        };
        let mut vehicle = Vehicle::new(rotation_tuning(config), camera_mode, camera_params);
        vehicle.set_indicator_scale(config.vehicle.indicator_scale);

        let bounds = SpawnBounds::new(
            Vec3::from_array(config.ball.bounds_min),
            Vec3::from_array(config.ball.bounds_max),
        );
        let policy = match config.ball.mode {
            BallMode::Random => MotionPolicy::Snap(RepositionBand::Uniform),
            BallMode::High => MotionPolicy::Snap(RepositionBand::High),
            BallMode::Flowing => MotionPolicy::Flow(FlowMotion::new(
                config.ball.flow_speed,
                config.ball.flow_wander,
            )),
        };
        let ball = BallTarget::new(BallParams {
            radius: config.ball.radius,
            hit_window: config.ball.hit_window,
            chase_timeout: config.ball.chase_timeout,
            timeout_enabled: config.ball.timeout_enabled,
            bounds,
            policy,
            seed: config.ball.seed,
        });

        Self { vehicle, ball }
    }

    /// Advance the simulation one fixed step: integrate the vehicle, then
    /// run the ball's hit/timeout machine against the nose ray.
    pub fn tick(&mut self, inputs: FlightInputs, dt: f32) -> BallTick {
        self.vehicle.apply_inputs(inputs, dt);
        let ray = self.vehicle.forward_ray();
        self.ball.evaluate(&ray, dt)
    }

    /// Advance the follow camera on the render cadence.
    ///
    /// Takes the unscaled frame delta, not the fixed step, so the camera
    /// stays smooth when the simulation is slowed or paused.
    pub fn update_camera(&mut self, frame_dt: f32) -> CameraPose {
        let target = self.ball.position();
        self.vehicle.update_camera(target, frame_dt)
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn ball(&self) -> &BallTarget {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut BallTarget {
        &mut self.ball
    }
}

/// Resolve the rotation tuning a config selects, honoring the preset.
pub fn rotation_tuning(config: &Config) -> RotationTuning {
    match config.vehicle.preset {
        TuningPreset::Standard => RotationPreset::Standard.tuning(),
        TuningPreset::Snappy => RotationPreset::Snappy.tuning(),
        TuningPreset::Custom => RotationTuning::from_scalars(
            config.vehicle.rotation_speed,
            config.vehicle.air_drag_coefficient,
            config.vehicle.max_rotation_speed,
        ),
    }
}

/// Stick shaping parameters from the input section.
pub fn stick_config(input: &InputConfig) -> StickConfig {
    let mut stick = StickConfig {
        sensitivity: input.sensitivity,
        topology: match input.topology {
            StickTopology::Cross => DeadzoneTopology::Cross,
            StickTopology::Circle => DeadzoneTopology::Circle,
            StickTopology::Square => DeadzoneTopology::Square,
        },
        ..StickConfig::default()
    };
    stick.set_deadzone(input.deadzone);
    stick
}

/// Air roll binding from the input section.
pub fn air_roll_direction(input: &InputConfig) -> AirRollDirection {
    if input.air_roll_left {
        AirRollDirection::Left
    } else {
        AirRollDirection::Right
    }
}
