//! Ray-sphere intersection.

use crate::hittable::{Hittable, SurfaceHit};
use prism_core::Sphere;
use prism_math::{Interval, Ray};

impl Hittable for Sphere {
    /// Solves |e + t*d - c|^2 = R^2 and keeps the nearest admitted root.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;
        let a = d.length_squared();
        if a == 0.0 {
            return None;
        }

        let h = d.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-h - sqrtd) / a;
        if !ray_t.admits(root) {
            root = (-h + sqrtd) / a;
            if !ray_t.admits(root) {
                return None;
            }
        }

        let normal = (ray.at(root) - self.center).try_normalize()?;
        Some(SurfaceHit { t: root, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_math::Vec3;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.hit(&ray, Interval::forward()).unwrap();
        assert!((hit.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_distance_scales_with_direction() {
        // Centre k units along the ray, hit at (k - R) / |d|
        let k = 7.0;
        let radius = 2.0;
        let direction = Vec3::new(1.0, 2.0, -2.0); // |d| = 3
        let center = direction.normalize() * k;
        let sphere = Sphere::new(center, radius);
        let ray = Ray::new(Vec3::ZERO, direction);

        let hit = sphere.hit(&ray, Interval::forward()).unwrap();
        assert!((hit.t - (k - radius) / 3.0).abs() < 1e-4);

        let outward = (ray.at(hit.t) - center).normalize();
        assert!(hit.normal.cross(outward).length() < 1e-4);
        assert!(hit.normal.dot(outward) > 0.0);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::forward()).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.hit(&ray, Interval::forward()).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root is behind the origin, far root is taken
        let hit = sphere.hit(&ray, Interval::forward()).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
        // Normal still points outwards
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_ignores_surface_it_starts_on() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let on_surface = Vec3::new(0.0, 0.0, -4.0);

        // Leaving the surface outwards: both roots are at or behind the origin
        let outwards = Ray::new(on_surface, Vec3::Z);
        assert!(sphere.hit(&outwards, Interval::forward()).is_none());

        // Going inwards: only the far side counts
        let inwards = Ray::new(on_surface, -Vec3::Z);
        let hit = sphere.hit(&inwards, Interval::forward()).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_respects_upper_bound() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(sphere.hit(&ray, Interval::forward().with_max(4.0)).is_none());
        assert!(sphere.hit(&ray, Interval::forward().with_max(4.5)).is_some());
    }
}
