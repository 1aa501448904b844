//! Recursive Whitted-style ray casting.
//!
//! A cast shades the closest hit locally, then spawns up to one mirror ray
//! and one transmitted ray. Transmitted rays either continue straight on
//! (plain transparency) or bend according to Snell's law when the material
//! has a refraction index. Each secondary ray gets one less unit of depth;
//! a cast with no depth left reports a miss.

use crate::hittable::{intersect, HitRecord};
use crate::shading::{saturate, shade};
use prism_core::{Color, Scene};
use prism_math::{Ray, Vec3};

/// Recursion bound used when nothing else is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Medium a ray is currently travelling through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Medium {
    /// Outside every object (index 1.0)
    Air,
    /// Inside an object with the given index of refraction
    Refractive(f32),
}

/// Casts rays into a borrowed, read-only scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    max_depth: u32,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Colour seen from `eye` through `through`, or `None` if the ray
    /// escapes the scene.
    pub fn trace(&self, eye: Vec3, through: Vec3) -> Option<Color> {
        self.cast(&Ray::through(eye, through), Medium::Air, self.max_depth)
    }

    /// Cast `ray` with `depth` levels of recursion left.
    ///
    /// Returns `None` when the depth is used up or nothing is hit; the caller
    /// decides what a miss looks like (usually the background colour).
    pub fn cast(&self, ray: &Ray, medium: Medium, depth: u32) -> Option<Color> {
        if depth == 0 {
            return None;
        }

        let hit = intersect(self.scene, ray)?;
        let material = hit.material;

        let mut color = shade(self.scene, ray.origin(), hit.p, hit.normal, material);

        if let Some(km) = material.reflective {
            color = self.reflect(ray.origin(), &hit, km, color, depth);
        }

        if let Some(kt) = material.transmissive {
            color = match material.refraction {
                Some(index) => match refracted_ray(ray, &hit, medium, index) {
                    Some((direction, next)) => {
                        let through = self.secondary(&Ray::new(hit.p, direction), next, depth - 1);
                        blend(color, through, kt)
                    }
                    // Total internal reflection
                    None => self.reflect(ray.origin(), &hit, Color::ONE, color, depth - 1),
                },
                None => {
                    let through = self.secondary(&Ray::new(hit.p, ray.direction()), Medium::Air, depth - 1);
                    blend(color, through, kt)
                }
            };
        }

        Some(saturate(color))
    }

    /// Colour along a secondary ray, falling back to the background.
    fn secondary(&self, ray: &Ray, medium: Medium, depth: u32) -> Color {
        self.cast(ray, medium, depth)
            .map(saturate)
            .unwrap_or(self.scene.background)
    }

    /// Add the mirror image seen from `origin`, scaled by `km`.
    fn reflect(&self, origin: Vec3, hit: &HitRecord, km: Color, color: Color, depth: u32) -> Color {
        let n = hit.normal;
        let v = (origin - hit.p).normalize_or_zero();
        let r = (2.0 * n.dot(v) * n - v).normalize_or_zero();

        let reflected = self.secondary(&Ray::new(hit.p, r), Medium::Air, depth.saturating_sub(1));
        saturate(color + reflected * km)
    }
}

/// Mix the local colour with what is seen through the surface.
fn blend(color: Color, through: Color, kt: Color) -> Color {
    saturate((Color::ONE - kt) * color + through * kt)
}

/// Direction and medium of the ray leaving `hit` through a refractive surface.
///
/// A ray arriving from air enters the material (index 1.0 over the material
/// index, geometric normal) and carries the material index onwards; a ray
/// already inside leaves into air (recorded index over 1.0, inverted normal).
/// Returns `None` when the ray cannot refract and must reflect instead.
fn refracted_ray(ray: &Ray, hit: &HitRecord, medium: Medium, index: f32) -> Option<(Vec3, Medium)> {
    let vi = ray.direction().normalize_or_zero();

    match medium {
        Medium::Air => {
            let (ni, nr) = (1.0, index);
            let n = hit.normal;
            if vi.dot(n) > 1.0 - (ni / nr).powi(2) {
                return None;
            }
            let direction = refraction_direction(vi, n, ni, nr)?;
            Some((direction, Medium::Refractive(nr)))
        }
        Medium::Refractive(ni) => {
            let direction = refraction_direction(vi, -hit.normal, ni, 1.0)?;
            Some((direction, Medium::Air))
        }
    }
}

/// Snell's law for unit incident direction `vi` and unit normal `n`, going
/// from index `ni` into index `nr`:
///
/// vr = ni (vi - n (vi.n)) / nr - n sqrt(1 - ni^2 (1 - (vi.n)^2) / nr^2)
///
/// Returns `None` past the critical angle, where the root is negative.
pub fn refraction_direction(vi: Vec3, n: Vec3, ni: f32, nr: f32) -> Option<Vec3> {
    let cos_i = vi.dot(n);
    let eta = ni / nr;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some(eta * (vi - n * cos_i) - n * k.sqrt())
}
