//! Light sources.

use prism_math::Vec3;

use crate::material::Color;

/// A light in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Uniform light, never shadowed.
    Ambient { color: Color },

    /// Parallel rays travelling along `direction`.
    Directional { color: Color, direction: Vec3 },

    /// Light radiating from a position.
    Point { color: Color, position: Vec3 },

    /// Point light restricted to a cone around `direction`. `cutoff` is the
    /// cone's half-angle in degrees.
    Spot {
        color: Color,
        position: Vec3,
        direction: Vec3,
        cutoff: f32,
    },
}

impl Light {
    pub fn color(&self) -> Color {
        match self {
            Light::Ambient { color }
            | Light::Directional { color, .. }
            | Light::Point { color, .. }
            | Light::Spot { color, .. } => *color,
        }
    }

    /// Short lowercase name of the light type, as written in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Light::Ambient { .. } => "ambient",
            Light::Directional { .. } => "directional",
            Light::Point { .. } => "point",
            Light::Spot { .. } => "spot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_color() {
        let spot = Light::Spot {
            color: Color::new(0.2, 0.4, 0.6),
            position: Vec3::Y,
            direction: -Vec3::Y,
            cutoff: 30.0,
        };
        assert_eq!(spot.color(), Color::new(0.2, 0.4, 0.6));
        assert_eq!(spot.kind(), "spot");
    }
}
