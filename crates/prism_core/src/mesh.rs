//! Triangle mesh geometry.
//!
//! Meshes are plain triangle soups. Face normals are never stored; they come
//! from the winding order of each triangle.

use prism_math::Vec3;

/// A single triangle given by its three corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unit face normal, normalize((b - a) x (c - b)).
    ///
    /// Returns `None` for degenerate (zero-area) triangles.
    pub fn normal(&self) -> Option<Vec3> {
        (self.b - self.a).cross(self.c - self.b).try_normalize()
    }

    /// Corners in winding order, each paired with the next corner.
    pub fn edges(&self) -> [(Vec3, Vec3); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}

/// An ordered list of triangles sharing one material.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
