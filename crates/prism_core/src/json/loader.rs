//! High-level scene loading.
//!
//! Converts parsed scene file records into a validated `Scene`. Everything
//! the renderer assumes about its input (positive radii, non-zero normals,
//! shininess alongside specular colour) is checked here.

use std::path::Path;

use prism_math::Vec3;
use thiserror::Error;

use crate::json::types::{LightRecord, MaterialRecord, ObjectRecord, SceneFile};
use crate::light::Light;
use crate::material::{Color, Material};
use crate::mesh::{Triangle, TriangleMesh};
use crate::scene::{Primitive, Scene};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {context}: {reason}")]
    Invalid { context: String, reason: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn invalid(context: impl Into<String>, reason: impl Into<String>) -> LoadError {
    LoadError::Invalid {
        context: context.into(),
        reason: reason.into(),
    }
}

/// Load a JSON scene file. The scene is named after the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let content = std::fs::read_to_string(path)?;
    load_scene_from_str(name, &content)
}

/// Load a scene from JSON text (useful for testing).
pub fn load_scene_from_str(name: &str, content: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(content)?;
    build_scene(name, file)
}

fn build_scene(name: &str, file: SceneFile) -> LoadResult<Scene> {
    let mut scene = Scene::new(name);

    // Optional camera parameters, otherwise the scene defaults stand
    if let Some(fov) = file.camera.field {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(invalid("camera", format!("field of view {fov} is outside (0, 180)")));
        }
        log::info!("Setting fov to {} degrees", fov);
        scene.fov = fov;
    }
    if let Some(background) = file.camera.background {
        scene.background = Color::from_array(background);
        log::info!("Setting background colour to {:?}", scene.background);
    }

    for (index, object) in file.objects.into_iter().enumerate() {
        let context = format!("object {} ({})", index, object.kind());
        scene.add_primitive(convert_object(&context, object)?);
    }

    for (index, light) in file.lights.into_iter().enumerate() {
        let light = convert_light(index, light)?;
        scene.add_light(light);
    }

    if scene.lights.is_empty() {
        log::warn!("Scene '{}' has no lights", name);
    }

    log::info!(
        "Loaded scene '{}': {} primitives ({} triangles), {} lights",
        scene.name,
        scene.primitive_count(),
        scene.triangle_count(),
        scene.light_count()
    );

    Ok(scene)
}

fn convert_object(context: &str, object: ObjectRecord) -> LoadResult<Primitive> {
    let (primitive, name) = match object {
        ObjectRecord::Sphere {
            name,
            position,
            radius,
            material,
        } => {
            if !(radius > 0.0) {
                return Err(invalid(context, format!("radius {radius} must be positive")));
            }
            let material = convert_material(context, material)?;
            (Primitive::sphere(Vec3::from_array(position), radius, material), name)
        }
        ObjectRecord::Plane {
            name,
            position,
            normal,
            material,
        } => {
            let normal = non_zero(context, "normal", normal)?;
            let material = convert_material(context, material)?;
            (Primitive::plane(Vec3::from_array(position), normal, material), name)
        }
        ObjectRecord::Mesh {
            name,
            triangles,
            material,
        } => {
            let triangles: Vec<Triangle> = triangles
                .iter()
                .map(|[a, b, c]| {
                    Triangle::new(Vec3::from_array(*a), Vec3::from_array(*b), Vec3::from_array(*c))
                })
                .collect();

            let degenerate = triangles.iter().filter(|t| t.normal().is_none()).count();
            if degenerate > 0 {
                log::warn!("{}: {} degenerate triangles will never be hit", context, degenerate);
            }

            let material = convert_material(context, material)?;
            (Primitive::mesh(TriangleMesh::new(triangles), material), name)
        }
    };

    Ok(match name {
        Some(name) => primitive.with_name(name),
        None => primitive,
    })
}

fn convert_material(context: &str, record: MaterialRecord) -> LoadResult<Material> {
    let mut material = Material::default();

    if let Some(ambient) = record.ambient {
        material = material.with_ambient(Color::from_array(ambient));
    }
    if let Some(diffuse) = record.diffuse {
        material = material.with_diffuse(Color::from_array(diffuse));
    }
    match (record.specular, record.shininess) {
        (Some(specular), Some(shininess)) => {
            material = material.with_specular(Color::from_array(specular), shininess);
        }
        (Some(_), None) => {
            return Err(invalid(context, "specular material has no shininess"));
        }
        (None, Some(_)) => {
            log::debug!("{}: shininess without specular colour is ignored", context);
        }
        (None, None) => {}
    }
    if let Some(reflective) = record.reflective {
        material = material.with_reflective(Color::from_array(reflective));
    }
    if let Some(transmissive) = record.transmissive {
        material = material.with_transmissive(transmissive.to_vec3());
    }
    if let Some(index) = record.refraction {
        if !(index > 0.0) {
            return Err(invalid(context, format!("refraction index {index} must be positive")));
        }
        if record.transmissive.is_none() {
            log::debug!("{}: refraction index without transmissive term is ignored", context);
        }
        material = material.with_refraction(index);
    }

    Ok(material)
}

fn convert_light(index: usize, record: LightRecord) -> LoadResult<Light> {
    let light = match record {
        LightRecord::Ambient { color } => Light::Ambient {
            color: Color::from_array(color),
        },
        LightRecord::Directional { color, direction } => Light::Directional {
            color: Color::from_array(color),
            direction: non_zero(&format!("light {index} (directional)"), "direction", direction)?,
        },
        LightRecord::Point { color, position } => Light::Point {
            color: Color::from_array(color),
            position: Vec3::from_array(position),
        },
        LightRecord::Spot {
            color,
            position,
            direction,
            cutoff,
        } => Light::Spot {
            color: Color::from_array(color),
            position: Vec3::from_array(position),
            direction: non_zero(&format!("light {index} (spot)"), "direction", direction)?,
            cutoff,
        },
    };

    Ok(light)
}

fn non_zero(context: &str, field: &str, value: [f32; 3]) -> LoadResult<Vec3> {
    let vector = Vec3::from_array(value);
    if vector.length_squared() > 0.0 && vector.is_finite() {
        Ok(vector)
    } else {
        Err(invalid(context, format!("{field} must be a non-zero vector")))
    }
}
