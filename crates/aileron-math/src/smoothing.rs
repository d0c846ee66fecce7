//! Frame-rate independent smoothing helpers.

use glam::Vec3;

/// Exponential smoothing factor for a given weight and time step:
/// `1 - e^(-weight * dt)`.
///
/// Lerping by this factor every frame converges on the target at a rate
/// independent of the frame duration. A zero `dt` yields zero (no motion).
pub fn smoothing_factor(weight: f32, dt: f32) -> f32 {
    1.0 - (-weight * dt).exp()
}

/// Lerp `current` toward `target` with independent per-axis exponential
/// weights. Heavier weights converge faster.
pub fn weighted_lerp(current: Vec3, target: Vec3, weights: Vec3, dt: f32) -> Vec3 {
    Vec3::new(
        current.x + (target.x - current.x) * smoothing_factor(weights.x, dt),
        current.y + (target.y - current.y) * smoothing_factor(weights.y, dt),
        current.z + (target.z - current.z) * smoothing_factor(weights.z, dt),
    )
}

/// Plain lerp factor `rate * dt`, clamped to `[0, 1]` so a long frame can
/// never overshoot the target.
pub fn lerp_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}
