//! Phong-style surface materials.
//!
//! Every lighting term is optional. A missing term contributes nothing, which
//! is how the shading engine tells a matte sphere from a mirror or a pane of
//! glass.

use prism_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Specular highlight colour and Phong exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Specular {
    pub color: Color,
    pub shininess: f32,
}

/// Surface response to light.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    /// Scaled by ambient lights
    pub ambient: Option<Color>,

    /// Lambertian term for directional, point and spot lights
    pub diffuse: Option<Color>,

    /// Blinn-Phong highlight
    pub specular: Option<Specular>,

    /// Mirror coefficient per channel
    pub reflective: Option<Color>,

    /// Transparency coefficient per channel
    pub transmissive: Option<Color>,

    /// Index of refraction. Only used together with `transmissive`; without
    /// it, transparent rays continue straight through.
    pub refraction: Option<f32>,
}

impl Material {
    /// Create a matte material with ambient and diffuse terms.
    pub fn matte(ambient: Color, diffuse: Color) -> Self {
        Self::default().with_ambient(ambient).with_diffuse(diffuse)
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = Some(ambient);
        self
    }

    pub fn with_diffuse(mut self, diffuse: Color) -> Self {
        self.diffuse = Some(diffuse);
        self
    }

    pub fn with_specular(mut self, color: Color, shininess: f32) -> Self {
        self.specular = Some(Specular { color, shininess });
        self
    }

    pub fn with_reflective(mut self, reflective: Color) -> Self {
        self.reflective = Some(reflective);
        self
    }

    pub fn with_transmissive(mut self, transmissive: Color) -> Self {
        self.transmissive = Some(transmissive);
        self
    }

    pub fn with_refraction(mut self, index: f32) -> Self {
        self.refraction = Some(index);
        self
    }
}
