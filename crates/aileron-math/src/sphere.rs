//! Sphere bounding volume.

use std::f32::consts::PI;

use glam::Vec3;

/// A sphere in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Surface area, `4πr²`.
    pub fn surface_area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }

    /// Volume, `(4/3)πr³`.
    pub fn volume(&self) -> f32 {
        (4.0 / 3.0) * PI * self.radius.powi(3)
    }

    /// Whether `point` lies inside or on the sphere.
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }
}
