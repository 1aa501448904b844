//! Ray-plane intersection.

use crate::hittable::{Hittable, SurfaceHit};
use prism_core::Plane;
use prism_math::{Interval, Ray, Vec3};

/// Parameter where `ray` crosses the plane through `point` with unit `normal`.
///
/// Rays parallel to the plane never cross it.
pub(crate) fn plane_parameter(point: Vec3, normal: Vec3, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let denominator = normal.dot(ray.direction());
    if denominator == 0.0 {
        return None;
    }

    let t = normal.dot(point - ray.origin()) / denominator;
    ray_t.admits(t).then_some(t)
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let normal = self.normal.try_normalize()?;
        let t = plane_parameter(self.point, normal, ray, ray_t)?;
        Some(SurfaceHit { t, normal })
    }
}
