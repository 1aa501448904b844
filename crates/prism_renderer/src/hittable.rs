//! Hittable trait and HitRecord for ray-object intersection.

use prism_core::{Material, Primitive, Scene, Shape};
use prism_math::{Interval, Ray, Vec3};

/// Where a ray meets a surface, before the material is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Unit surface normal (geometric, not flipped towards the ray)
    pub normal: Vec3,
}

/// Record of the closest ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable {
    /// Nearest intersection whose parameter is admitted by `ray_t`
    /// (half-open, `[min, max)`).
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit>;
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::Plane(plane) => plane.hit(ray, ray_t),
            Shape::Mesh(mesh) => mesh.hit(ray, ray_t),
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        self.shape.hit(ray, ray_t)
    }
}

/// Find the closest hit among `primitives`.
///
/// The search interval shrinks to the best `t` found so far, so among hits
/// at the same distance the earliest primitive wins.
pub fn closest_hit<'a>(
    primitives: &'a [Primitive],
    ray: &Ray,
    ray_t: Interval,
) -> Option<HitRecord<'a>> {
    let mut closest = None;
    let mut closest_so_far = ray_t.max;

    for primitive in primitives {
        if let Some(hit) = primitive.hit(ray, ray_t.with_max(closest_so_far)) {
            closest_so_far = hit.t;
            closest = Some(HitRecord {
                t: hit.t,
                p: ray.at(hit.t),
                normal: hit.normal,
                material: &primitive.material,
            });
        }
    }

    closest
}

/// Closest hit in front of the ray origin (t >= `T_MIN`).
pub fn intersect<'a>(scene: &'a Scene, ray: &Ray) -> Option<HitRecord<'a>> {
    closest_hit(&scene.primitives, ray, Interval::forward())
}
