//! Analog stick shaping: deadzone topologies and sensitivity.

use glam::Vec2;

/// How the 2D deadzone region is shaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeadzoneTopology {
    /// Per-axis deadzone: each axis is zeroed independently below the
    /// threshold and passed through unchanged above it (no rescaling).
    #[default]
    Cross,
    /// Radial deadzone: the whole vector is zeroed when its magnitude falls
    /// below the threshold; the output magnitude never exceeds 1.
    Circle,
    /// The circular stick range is remapped onto the unit square, then
    /// filtered like [`Cross`](Self::Cross). Round physical stick gates
    /// reach full corner deflection this way.
    Square,
}

/// Stick shaping parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickConfig {
    /// Deadzone threshold in `[0, 1)`.
    pub deadzone: f32,
    /// Post-deadzone gain applied to both axes.
    pub sensitivity: f32,
    pub topology: DeadzoneTopology,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            deadzone: 0.10,
            sensitivity: 1.0,
            topology: DeadzoneTopology::Cross,
        }
    }
}

impl StickConfig {
    /// Set the deadzone threshold, clamped to `[0, 0.99]`. A full-range
    /// deadzone would swallow every input.
    pub fn set_deadzone(&mut self, value: f32) {
        self.deadzone = value.clamp(0.0, 0.99);
    }
}

/// Shape a raw stick sample into flight-ready axes in `[-1, 1]`.
///
/// Non-finite samples are treated as centered. The output is never NaN and
/// never exceeds unit deflection per axis; a centered stick always maps to
/// exactly `(0, 0)`.
pub fn shape(raw: Vec2, config: &StickConfig) -> Vec2 {
    let raw = sanitize(raw);
    match config.topology {
        DeadzoneTopology::Cross => cross(raw, config),
        DeadzoneTopology::Circle => circle(raw, config),
        DeadzoneTopology::Square => cross(circle_to_square(raw), config),
    }
}

fn sanitize(raw: Vec2) -> Vec2 {
    Vec2::new(
        if raw.x.is_finite() { raw.x } else { 0.0 },
        if raw.y.is_finite() { raw.y } else { 0.0 },
    )
}

/// Per-axis deadzone; surviving values pass through unscaled before the
/// sensitivity gain is applied.
fn cross(v: Vec2, config: &StickConfig) -> Vec2 {
    let filtered = Vec2::new(
        if v.x.abs() < config.deadzone { 0.0 } else { v.x },
        if v.y.abs() < config.deadzone { 0.0 } else { v.y },
    );
    (filtered * config.sensitivity).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

/// Radial deadzone with joint magnitude clamping: direction is preserved,
/// only the magnitude is scaled back to 1 on overflow.
fn circle(v: Vec2, config: &StickConfig) -> Vec2 {
    if v.length() < config.deadzone {
        return Vec2::ZERO;
    }
    let scaled = v * config.sensitivity;
    let len = scaled.length();
    if len > 1.0 { scaled / len } else { scaled }
}

/// Map the unit disc onto the unit square along radial lines.
///
/// Each point is stretched away from the origin by `r / max(|x|, |y|)`, so
/// circle-edge points land on the square's edge in the same direction and
/// diagonal deflection reaches the corners.
fn circle_to_square(v: Vec2) -> Vec2 {
    let max_component = v.x.abs().max(v.y.abs());
    if max_component <= f32::EPSILON {
        return Vec2::ZERO;
    }
    v * (v.length() / max_component)
}
