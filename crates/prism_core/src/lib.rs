//! Prism Core - Scene model and scene files for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene model**: `Scene`, `Primitive`, `Shape`, `Material`, `Light`
//! - **Scene files**: JSON scene parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::json::load_scene;
//!
//! let scene = load_scene("scenes/c.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//! ```

pub mod json;
pub mod light;
pub mod material;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use json::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use light::Light;
pub use material::{Color, Material, Specular};
pub use mesh::{Triangle, TriangleMesh};
pub use scene::{Plane, Primitive, Scene, Shape, Sphere};
