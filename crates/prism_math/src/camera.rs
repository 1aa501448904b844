use glam::Vec3;

use crate::Ray;

/// Pinhole camera that maps pixels to points on an image plane.
///
/// The eye looks down -Z with +Y up. The image plane sits `distance` units in
/// front of the eye and pixel (0, 0) is the bottom-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub distance: f32,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    /// Default vertical field of view, in degrees.
    pub const DEFAULT_FOV: f32 = 60.0;

    /// Create a camera at the origin for a `width` x `height` viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::ZERO,
            fov_y: Self::DEFAULT_FOV,
            distance: 1.0,
            width,
            height,
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov_y: f32) -> Self {
        self.fov_y = fov_y;
        self
    }

    /// Move the eye.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Update the viewport (e.g., on window resize)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Point on the image plane through the centre of pixel (x, y).
    pub fn through_point(&self, x: u32, y: u32) -> Vec3 {
        let h = self.distance * (self.fov_y.to_radians() / 2.0).tan();
        let w = h * self.aspect();

        let u = -w + 2.0 * w * (x as f32 + 0.5) / self.width as f32;
        let v = -h + 2.0 * h * (y as f32 + 0.5) / self.height as f32;

        self.eye + Vec3::new(u, v, -self.distance)
    }

    /// Primary ray from the eye through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        Ray::through(self.eye, self.through_point(x, y))
    }
}
