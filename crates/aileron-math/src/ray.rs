//! Half-infinite rays and ray-sphere intersection.

use glam::Vec3;

use crate::Sphere;

/// A ray: origin plus a unit direction.
///
/// The direction is normalized at construction; a degenerate (near-zero)
/// direction falls back to `-Z` so a ray can always be traced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let direction = if direction.length_squared() > 1e-12 {
            direction.normalize()
        } else {
            Vec3::NEG_Z
        };
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with `sphere`, or
    /// `None` when the ray misses or the sphere lies entirely behind the
    /// origin.
    ///
    /// A ray starting inside the sphere reports the exit distance.
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<f32> {
        let oc = self.origin - sphere.center;
        // Quadratic in t with a = 1 since the direction is unit length.
        let half_b = oc.dot(self.direction);
        let c = oc.length_squared() - sphere.radius * sphere.radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = -half_b - sqrt_d;
        if t_near >= 0.0 {
            return Some(t_near);
        }
        let t_far = -half_b + sqrt_d;
        if t_far >= 0.0 { Some(t_far) } else { None }
    }

    /// Whether the ray hits `sphere` anywhere in front of its origin.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.intersect_sphere(sphere).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_sphere_head_on() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let t = ray.intersect_sphere(&sphere).unwrap();
        assert!((t - 9.0).abs() < 1e-4, "entry distance should be 9, got {t}");
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let sphere = Sphere::new(Vec3::new(5.0, 0.0, -10.0), 1.0);
        assert!(!ray.intersects_sphere(&sphere));
    }

    #[test]
    fn test_ray_grazes_sphere_edge() {
        // Sphere offset exactly one radius sideways: tangent hit.
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, -10.0), 1.0);
        assert!(ray.intersects_sphere(&sphere));
        let sphere_past = Sphere::new(Vec3::new(1.001, 0.0, -10.0), 1.0);
        assert!(!ray.intersects_sphere(&sphere_past));
    }

    #[test]
    fn test_sphere_behind_ray_is_missed() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(ray.intersect_sphere(&sphere).is_none());
    }

    #[test]
    fn test_ray_from_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let t = ray.intersect_sphere(&sphere).unwrap();
        assert!((t - 2.0).abs() < 1e-4, "exit distance should be 2, got {t}");
    }

    #[test]
    fn test_degenerate_direction_falls_back() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert!(ray.direction.is_finite());
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, -4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_walks_the_ray() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X);
        let p = ray.point_at(4.0);
        assert!((p - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-6);
    }
}
