//! Spawn volume for ball repositioning.

use glam::Vec3;
use rand::Rng;

/// Fraction of the vertical span that forms the bottom of the high band.
const HIGH_BAND_MIN_HEIGHT: f32 = 0.75;
/// Fraction of the depth span kept in front (toward -Z) for the high band.
const HIGH_BAND_DEPTH: f32 = 0.35;
/// Half-width of the high band around the lateral center, as a fraction of
/// the full width.
const HIGH_BAND_HALF_WIDTH: f32 = 0.25;

/// Axis-aligned box the ball can be placed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SpawnBounds {
    /// Build bounds from two corners, sorting the components so `min <= max`
    /// even when the corners are given swapped.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Uniform sample inside the full volume.
    pub fn sample_uniform<R: Rng>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
            rng.random_range(self.min.z..=self.max.z),
        )
    }

    /// Sample from the narrow high/forward band: the top of the volume,
    /// pushed toward -Z (ahead of the vehicle) and centered laterally.
    /// Timeouts and high-band repositions use this to hand the player a
    /// prominent target.
    pub fn sample_high_band<R: Rng>(&self, rng: &mut R) -> Vec3 {
        self.high_band().sample_uniform(rng)
    }

    /// The sub-volume [`sample_high_band`](Self::sample_high_band) draws
    /// from.
    pub fn high_band(&self) -> SpawnBounds {
        let size = self.max - self.min;
        let center_x = (self.min.x + self.max.x) * 0.5;
        let half_width = size.x * HIGH_BAND_HALF_WIDTH;
        SpawnBounds {
            min: Vec3::new(
                center_x - half_width,
                self.min.y + size.y * HIGH_BAND_MIN_HEIGHT,
                self.min.z,
            ),
            max: Vec3::new(
                center_x + half_width,
                self.max.y,
                self.min.z + size.z * HIGH_BAND_DEPTH,
            ),
        }
    }

    /// Whether `point` lies inside the bounds (inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-15.0, 1.0, -15.0),
            max: Vec3::new(15.0, 12.0, 15.0),
        }
    }
}
