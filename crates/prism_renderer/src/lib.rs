//! Prism renderer - Whitted-style CPU ray tracing
//!
//! Casts one ray per pixel into a [`Scene`], shades the closest hit with
//! Phong-style direct lighting and hard shadows, then follows mirror and
//! refracted rays up to a fixed depth.

mod hittable;
mod plane;
mod renderer;
mod shading;
mod sphere;
mod tracer;
mod triangle;

pub use hittable::{closest_hit, intersect, HitRecord, Hittable, SurfaceHit};
pub use renderer::{
    color_to_rgba, render, render_parallel, render_pixel, render_scanlines, shade_pixel, ImageBuffer,
    RenderConfig,
};
pub use shading::{in_shadow, saturate, shade, DIRECTIONAL_SHADOW_DISTANCE};
pub use tracer::{refraction_direction, Medium, Tracer, DEFAULT_MAX_DEPTH};

/// Re-export the scene model and math types used across the renderer API
pub use prism_core::{Color, Light, Material, Primitive, Scene, Shape};
pub use prism_math::{Camera, Interval, Ray, Vec3};
