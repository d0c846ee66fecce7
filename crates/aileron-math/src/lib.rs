//! Geometry and smoothing primitives for the aileron trainer: rays, spheres,
//! cubic Bézier curves, and frame-rate independent interpolation helpers.

mod bezier;
mod ray;
mod smoothing;
mod sphere;

pub use bezier::CubicBezier;
pub use ray::Ray;
pub use smoothing::{lerp_factor, smoothing_factor, weighted_lerp};
pub use sphere::Sphere;
