//! JSON scene files.
//!
//! Scene files describe the camera, a list of objects and a list of lights:
//!
//! ```json
//! {
//!     "camera": { "field": 60, "background": [0, 0, 0] },
//!     "objects": [
//!         { "type": "sphere", "position": [0, 0, -5], "radius": 1,
//!           "material": { "ambient": [0.1, 0, 0], "diffuse": [1, 0, 0] } }
//!     ],
//!     "lights": [
//!         { "type": "ambient", "color": [1, 1, 1] }
//!     ]
//! }
//! ```
//!
//! Supported object types are `sphere`, `plane` and `mesh`; light types are
//! `ambient`, `directional`, `point` and `spot`.
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

mod loader;
mod types;

pub use loader::*;
pub use types::*;
