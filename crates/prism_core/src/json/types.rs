//! Raw scene file records, exactly as they appear in JSON.
//!
//! These mirror the file format one-to-one. Validation and conversion into
//! the scene model happen in the loader.

use prism_math::Vec3;
use serde::Deserialize;

/// Top-level scene file.
#[derive(Debug, Default, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: CameraRecord,
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
    #[serde(default)]
    pub lights: Vec<LightRecord>,
}

/// Optional camera overrides.
#[derive(Debug, Default, Deserialize)]
pub struct CameraRecord {
    /// Vertical field of view in degrees
    pub field: Option<f32>,
    pub background: Option<[f32; 3]>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectRecord {
    Sphere {
        name: Option<String>,
        position: [f32; 3],
        radius: f32,
        #[serde(default)]
        material: MaterialRecord,
    },
    Plane {
        name: Option<String>,
        position: [f32; 3],
        normal: [f32; 3],
        #[serde(default)]
        material: MaterialRecord,
    },
    Mesh {
        name: Option<String>,
        triangles: Vec<[[f32; 3]; 3]>,
        #[serde(default)]
        material: MaterialRecord,
    },
}

impl ObjectRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectRecord::Sphere { .. } => "sphere",
            ObjectRecord::Plane { .. } => "plane",
            ObjectRecord::Mesh { .. } => "mesh",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MaterialRecord {
    pub ambient: Option<[f32; 3]>,
    pub diffuse: Option<[f32; 3]>,
    pub specular: Option<[f32; 3]>,
    pub shininess: Option<f32>,
    pub reflective: Option<[f32; 3]>,
    pub transmissive: Option<Coefficient>,
    pub refraction: Option<f32>,
}

/// A coefficient written either as one number or per channel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coefficient {
    Scalar(f32),
    Rgb([f32; 3]),
}

impl Coefficient {
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Coefficient::Scalar(value) => Vec3::splat(value),
            Coefficient::Rgb(rgb) => Vec3::from_array(rgb),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightRecord {
    Ambient {
        color: [f32; 3],
    },
    Directional {
        color: [f32; 3],
        direction: [f32; 3],
    },
    Point {
        color: [f32; 3],
        position: [f32; 3],
    },
    Spot {
        color: [f32; 3],
        position: [f32; 3],
        direction: [f32; 3],
        cutoff: f32,
    },
}
