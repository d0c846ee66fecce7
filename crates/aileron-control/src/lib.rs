//! Vehicle flight control for the aileron trainer.
//!
//! Angular-velocity rotation integration with per-axis tuning, instantaneous
//! rotation-axis feedback, a two-mode follow camera, and the [`Vehicle`] that
//! ties them together.

mod follow_camera;
mod rotation;
mod rotation_axis;
mod skins;
mod vehicle;

pub use follow_camera::{CameraParams, CameraPose, FollowCamera, FollowMode};
pub use rotation::{
    ANGULAR_REST_THRESHOLD, AxisTuning, ROLL_MAX_BIAS, ROLL_SPEED_BIAS, RotationIntegrator,
    RotationPreset, RotationTuning,
};
pub use rotation_axis::{
    AXIS_ANGLE_EPSILON, AxisIndicator, FALLBACK_SPIN_AXIS, RotationAxis, axis_indicator,
    rotation_axis_of,
};
pub use skins::SkinRegistry;
pub use vehicle::Vehicle;
