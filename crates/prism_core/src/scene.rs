//! Scene model for Prism.
//!
//! A scene is built once (usually by the loader) and is read-only while it
//! is rendered, so it can be shared freely between render threads.

use prism_math::Vec3;

use crate::light::Light;
use crate::material::{Color, Material};
use crate::mesh::TriangleMesh;

/// A sphere given by centre and radius (> 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An infinite plane through `point`.
///
/// `normal` is stored as given and renormalized wherever it is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// Geometry of a primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Mesh(TriangleMesh),
}

impl Shape {
    /// Number of triangles this shape contributes (0 for analytic shapes).
    pub fn triangle_count(&self) -> usize {
        match self {
            Shape::Mesh(mesh) => mesh.triangle_count(),
            Shape::Sphere(_) | Shape::Plane(_) => 0,
        }
    }
}

/// A shape paired with its material.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Optional name from the scene file
    pub name: Option<String>,
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self {
            name: None,
            shape,
            material,
        }
    }

    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::new(Shape::Sphere(Sphere::new(center, radius)), material)
    }

    pub fn plane(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self::new(Shape::Plane(Plane::new(point, normal)), material)
    }

    pub fn mesh(mesh: TriangleMesh, material: Material) -> Self {
        Self::new(Shape::Mesh(mesh), material)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Everything needed to render: camera parameters, primitives and lights.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Vertical field of view in degrees
    pub fov: f32,

    /// Colour of rays that escape the scene
    pub background: Color,

    /// Primitives in file order; intersection ties go to the earlier one
    pub primitives: Vec<Primitive>,

    /// Lights in file order
    pub lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: String::new(),
            fov: 60.0,
            background: Color::ZERO,
            primitives: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a primitive and return its index.
    pub fn add_primitive(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.primitives
            .iter()
            .map(|primitive| primitive.shape.triangle_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;

    #[test]
    fn test_scene_defaults() {
        let scene = Scene::new("empty");
        assert_eq!(scene.name, "empty");
        assert_eq!(scene.fov, 60.0);
        assert_eq!(scene.background, Color::ZERO);
        assert_eq!(scene.primitive_count(), 0);
        assert_eq!(scene.light_count(), 0);
    }

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test").with_background(Color::new(0.1, 0.2, 0.3));

        let mesh = TriangleMesh::new(vec![
            Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
            Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::Z),
        ]);

        let first = scene.add_primitive(Primitive::sphere(Vec3::ZERO, 1.0, Material::default()));
        let second = scene.add_primitive(Primitive::mesh(mesh, Material::default()).with_name("tris"));
        scene.add_light(Light::Ambient { color: Color::ONE });

        assert_eq!((first, second), (0, 1));
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.triangle_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.primitives[1].name.as_deref(), Some("tris"));
    }
}
