//! Instantaneous rotation-axis extraction and the spin indicator derived
//! from it.
//!
//! The per-tick incremental rotation is converted to matrix form; the trace
//! yields the rotation angle and the antisymmetric off-diagonal differences
//! yield the axis. From the axis a ring-shaped indicator is computed that a
//! renderer can place around the vehicle to visualize the current spin.

use glam::{Mat3, Quat, Vec3};

/// Rotation increments with an angle at or below this are treated as no
/// rotation and report the fallback axis.
pub const AXIS_ANGLE_EPSILON: f32 = 1e-6;

/// Axis reported when the increment is too small to define one: the local
/// roll axis. A convention chosen for stable feedback, not a physical claim.
pub const FALLBACK_SPIN_AXIS: Vec3 = Vec3::Z;

/// Local forward direction of the vehicle model.
const FORWARD: Vec3 = Vec3::NEG_Z;

/// Length of the rendered axis line, in vehicle-local units.
const AXIS_LINE_LENGTH: f32 = 2.0;

/// Ring radius multiplier applied on top of the geometric radius.
const RING_SCALE_GAIN: f32 = 1.5;

/// Smallest rendered ring scale; keeps the indicator visible (and its
/// transform invertible) during near-pure roll.
const RING_MIN_SCALE: f32 = 0.01;

/// An instantaneous rotation axis with its per-tick angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationAxis {
    /// Unit axis, canonicalized so the z component is never positive.
    pub axis: Vec3,
    /// Rotation angle over the tick, in radians (always >= 0).
    pub angle: f32,
}

impl Default for RotationAxis {
    fn default() -> Self {
        Self {
            axis: FALLBACK_SPIN_AXIS,
            angle: 0.0,
        }
    }
}

/// Extract the rotation axis of an incremental rotation.
///
/// The angle comes from the matrix trace (`cos θ = (trace - 1) / 2`, clamped
/// before `acos`). The axis sign is flipped whenever its z component comes
/// out positive, so consecutive near-identical increments can never flip the
/// reported axis from frame to frame.
pub fn rotation_axis_of(delta: Quat) -> RotationAxis {
    let m = Mat3::from_quat(delta);
    let trace = m.x_axis.x + m.y_axis.y + m.z_axis.z;
    let cos_angle = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0);
    let angle = cos_angle.acos();

    if angle <= AXIS_ANGLE_EPSILON {
        return RotationAxis::default();
    }

    // Antisymmetric part of the matrix. Columns are m.*_axis, so
    // m.y_axis.z reads row 3 / column 2.
    let mut axis = Vec3::new(
        m.z_axis.y - m.y_axis.z,
        m.x_axis.z - m.z_axis.x,
        m.y_axis.x - m.x_axis.y,
    );
    if axis.length_squared() <= f32::EPSILON {
        // Angle near pi makes the antisymmetric part vanish.
        return RotationAxis {
            axis: FALLBACK_SPIN_AXIS,
            angle,
        };
    }
    axis = axis.normalize();
    if axis.z > 0.0 {
        axis = -axis;
    }

    RotationAxis { axis, angle }
}

/// Ring-and-line feedback geometry derived from a rotation axis.
///
/// All quantities are in vehicle-local space; the host applies the vehicle's
/// world transform before rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisIndicator {
    /// Center of the ring along the axis.
    pub ring_center: Vec3,
    /// Uniform scale for the ring mesh.
    pub ring_scale: f32,
    /// Rotation taking the ring's +Z normal onto the axis.
    pub ring_orientation: Quat,
    /// Far endpoint of the axis line (the near end is the origin).
    pub line_end: Vec3,
}

impl Default for AxisIndicator {
    fn default() -> Self {
        axis_indicator(&RotationAxis::default(), 1.0)
    }
}

/// Compute indicator geometry for a rotation axis.
///
/// The ring radius encodes how far the spin is from pure roll: alignment of
/// the axis with the local forward direction shrinks it toward zero, a
/// perpendicular (tornado-style) axis grows it to the maximum. The ring
/// slides backward along the axis as it grows.
pub fn axis_indicator(rotation: &RotationAxis, base_scale: f32) -> AxisIndicator {
    let axis = rotation.axis;
    let alignment = FORWARD.dot(axis).abs().min(1.0);
    let radius = (1.0 - alignment * alignment).max(0.0).sqrt();
    let ring_scale = (radius * RING_SCALE_GAIN * base_scale).max(RING_MIN_SCALE);

    let ring_center = axis * (0.9 - ring_scale * 0.2);

    let ring_up = Vec3::Z;
    let dot = ring_up.dot(axis);
    let ring_orientation = if dot > 0.9999 {
        Quat::IDENTITY
    } else if dot < -0.9999 {
        // Antiparallel: any perpendicular axis works; pick X.
        Quat::from_rotation_x(std::f32::consts::PI)
    } else {
        Quat::from_rotation_arc(ring_up, axis)
    };

    AxisIndicator {
        ring_center,
        ring_scale,
        ring_orientation,
        line_end: axis * AXIS_LINE_LENGTH,
    }
}
