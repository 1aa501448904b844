//! Ray-triangle intersection.
//!
//! The ray is first intersected with the triangle's plane, then the hit point
//! is tested against each edge: it is inside when it lies strictly to the
//! left of all three edges, seen along the face normal. Points exactly on an
//! edge are misses.

use crate::hittable::{Hittable, SurfaceHit};
use crate::plane::plane_parameter;
use prism_core::{Triangle, TriangleMesh};
use prism_math::{Interval, Ray};

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        // Degenerate triangles have no plane to hit
        let normal = self.normal()?;
        let t = plane_parameter(self.a, normal, ray, ray_t)?;
        let x = ray.at(t);

        let inside = self
            .edges()
            .iter()
            .all(|&(start, end)| (end - start).cross(x - start).dot(normal) > 0.0);

        inside.then_some(SurfaceHit { t, normal })
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for triangle in &self.triangles {
            if let Some(hit) = triangle.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }
}
