//! Local illumination with hard shadows.
//!
//! Each light adds an ambient, diffuse (Lambert) or specular (Blinn-Phong)
//! term depending on which terms the material defines. Directional, point
//! and spot lights are skipped entirely when a shadow ray towards them is
//! blocked. Every primitive blocks light, transparent or not.

use crate::hittable::intersect;
use prism_core::{Color, Light, Material, Scene};
use prism_math::{Interval, Ray, Vec3};

/// Distance along a directional light's (reversed) direction used as the
/// shadow-ray target in place of infinity.
pub const DIRECTIONAL_SHADOW_DISTANCE: f32 = 100.0;

/// Clamp each channel to [0, 1].
#[inline]
pub fn saturate(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Check whether anything lies strictly between `point` and `target`.
///
/// The shadow ray runs from `point` (t = 0) to `target` (t = 1); hits behind
/// the point or beyond the target do not occlude.
pub fn in_shadow(scene: &Scene, point: Vec3, target: Vec3) -> bool {
    let ray = Ray::through(point, target);
    intersect(scene, &ray).is_some_and(|hit| Interval::UNIT.surrounds(hit.t))
}

/// Colour of `point` seen from `eye`, summed over every light and clamped.
pub fn shade(scene: &Scene, eye: Vec3, point: Vec3, normal: Vec3, material: &Material) -> Color {
    let n = normal.normalize_or_zero();
    let v = (eye - point).normalize_or_zero();
    let mut color = Color::ZERO;

    for light in &scene.lights {
        match *light {
            Light::Ambient { color: ia } => {
                if let Some(ka) = material.ambient {
                    color += ia * ka;
                }
            }
            Light::Directional {
                color: light_color,
                direction,
            } => {
                let l = (-direction).normalize_or_zero();
                if in_shadow(scene, point, point + l * DIRECTIONAL_SHADOW_DISTANCE) {
                    continue;
                }
                color += direct(light_color, material, n, l, v);
            }
            Light::Point {
                color: light_color,
                position,
            } => {
                if in_shadow(scene, point, position) {
                    continue;
                }
                let l = (position - point).normalize_or_zero();
                color += direct(light_color, material, n, l, v);
            }
            Light::Spot {
                color: light_color,
                position,
                direction,
                cutoff,
            } => {
                let l = (position - point).normalize_or_zero();
                let axis = direction.normalize_or_zero();

                // Outside the cone
                if l.dot(-axis) < cutoff.to_radians().cos() {
                    continue;
                }
                if in_shadow(scene, point, position) {
                    continue;
                }
                color += direct(light_color, material, n, l, v);
            }
        }
    }

    saturate(color)
}

/// Diffuse and specular contribution of one unoccluded light.
fn direct(light_color: Color, material: &Material, n: Vec3, l: Vec3, v: Vec3) -> Color {
    let mut color = Color::ZERO;

    if let Some(kd) = material.diffuse {
        color += light_color * kd * n.dot(l).max(0.0);
    }

    if let Some(specular) = material.specular {
        let h = (l + v).normalize_or_zero();
        color += light_color * specular.color * n.dot(h).max(0.0).powf(specular.shininess);
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Primitive;

    fn approx(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-5
    }

    fn red_ball_scene() -> Scene {
        let mut scene = Scene::new("red ball");
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::matte(Color::new(0.1, 0.0, 0.0), Color::new(1.0, 0.0, 0.0)),
        ));
        scene.add_light(Light::Ambient { color: Color::ONE });
        scene
    }

    #[test]
    fn test_ambient_only() {
        let scene = red_ball_scene();
        let material = &scene.primitives[0].material;
        let point = Vec3::new(0.0, 0.0, -4.0);

        let color = shade(&scene, Vec3::ZERO, point, Vec3::Z, material);
        assert!(approx(color, Color::new(0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_ambient_needs_ambient_term() {
        let mut scene = Scene::new("no ambient term");
        scene.add_light(Light::Ambient { color: Color::ONE });
        let material = Material::default().with_diffuse(Color::ONE);

        let color = shade(&scene, Vec3::Z, Vec3::ZERO, Vec3::Z, &material);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_directional_adds_diffuse_and_clamps() {
        let mut scene = red_ball_scene();
        scene.add_light(Light::Directional {
            color: Color::ONE,
            direction: Vec3::new(0.0, 0.0, -1.0),
        });
        let material = scene.primitives[0].material;
        let point = Vec3::new(0.0, 0.0, -4.0);

        // 0.1 ambient + 1.0 diffuse, clamped
        let color = shade(&scene, Vec3::ZERO, point, Vec3::Z, &material);
        assert!(approx(color, Color::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let mut scene = Scene::new("cosine");
        scene.add_light(Light::Directional {
            color: Color::ONE,
            // 60 degrees off the normal
            direction: -Vec3::new(3.0_f32.sqrt() / 2.0, 0.5, 0.0),
        });
        let material = Material::default().with_diffuse(Color::splat(0.8));

        let color = shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material);
        assert!(approx(color, Color::splat(0.4)));
    }

    #[test]
    fn test_light_behind_surface_adds_nothing() {
        let mut scene = Scene::new("backlit");
        scene.add_light(Light::Point {
            color: Color::ONE,
            position: Vec3::new(0.0, -5.0, 0.0),
        });
        let material = Material::default().with_diffuse(Color::ONE);

        let color = shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_specular_highlight() {
        let mut scene = Scene::new("highlight");
        scene.add_light(Light::Point {
            color: Color::ONE,
            position: Vec3::new(0.0, 5.0, 0.0),
        });
        let material = Material::default().with_specular(Color::splat(0.5), 20.0);

        // Eye straight above: half-vector equals the normal
        let on_axis = shade(&scene, Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO, Vec3::Y, &material);
        assert!(approx(on_axis, Color::splat(0.5)));

        // Grazing eye: highlight falls off sharply
        let grazing = shade(&scene, Vec3::new(10.0, 0.5, 0.0), Vec3::ZERO, Vec3::Y, &material);
        assert!(grazing.x < 0.01);
    }

    #[test]
    fn test_point_light_occluded() {
        let mut scene = Scene::new("shadow");
        let occluder = scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 2.5, 0.0),
            0.5,
            Material::default(),
        ));
        assert_eq!(occluder, 0);
        scene.add_light(Light::Point {
            color: Color::ONE,
            position: Vec3::new(0.0, 5.0, 0.0),
        });
        let material = Material::default()
            .with_diffuse(Color::ONE)
            .with_specular(Color::ONE, 10.0);

        let eye = Vec3::new(0.0, 1.0, 1.0);
        assert!(in_shadow(&scene, Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)));
        assert_eq!(shade(&scene, eye, Vec3::ZERO, Vec3::Y, &material), Color::ZERO);

        // Move the light out from behind the sphere
        scene.lights[0] = Light::Point {
            color: Color::ONE,
            position: Vec3::new(5.0, 5.0, 0.0),
        };
        assert!(!in_shadow(&scene, Vec3::ZERO, Vec3::new(5.0, 5.0, 0.0)));
        let lit = shade(&scene, eye, Vec3::ZERO, Vec3::Y, &Material::default().with_diffuse(Color::ONE));
        assert!(lit.x > 0.0 && lit.y > 0.0 && lit.z > 0.0);
    }

    #[test]
    fn test_occluder_beyond_light_does_not_shadow() {
        let mut scene = Scene::new("beyond");
        scene.add_primitive(Primitive::sphere(Vec3::new(0.0, 4.0, 0.0), 0.5, Material::default()));

        assert!(!in_shadow(&scene, Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0)));
        assert!(in_shadow(&scene, Vec3::ZERO, Vec3::new(0.0, 6.0, 0.0)));
    }

    #[test]
    fn test_occluder_behind_point_does_not_shadow() {
        let mut scene = Scene::new("behind");
        scene.add_primitive(Primitive::sphere(Vec3::new(0.0, -3.0, 0.0), 1.0, Material::default()));

        assert!(!in_shadow(&scene, Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)));
    }

    #[test]
    fn test_transparent_primitives_still_cast_shadows() {
        let mut scene = Scene::new("glass shadow");
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 2.5, 0.0),
            0.5,
            Material::default().with_transmissive(Color::ONE).with_refraction(1.5),
        ));

        assert!(in_shadow(&scene, Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)));
    }

    #[test]
    fn test_directional_shadow() {
        let mut scene = Scene::new("directional shadow");
        scene.add_primitive(Primitive::sphere(Vec3::new(0.0, 50.0, 0.0), 2.0, Material::default()));
        scene.add_light(Light::Directional {
            color: Color::ONE,
            direction: -Vec3::Y,
        });
        let material = Material::default().with_diffuse(Color::ONE);

        assert_eq!(shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material), Color::ZERO);

        // Beyond the stand-in distance the occluder no longer counts
        scene.primitives[0] = Primitive::sphere(Vec3::new(0.0, 150.0, 0.0), 2.0, Material::default());
        assert!(approx(shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material), Color::ONE));
    }

    #[test]
    fn test_spot_cutoff() {
        let mut scene = Scene::new("spot");
        scene.add_light(Light::Spot {
            color: Color::ONE,
            position: Vec3::new(0.0, 5.0, 0.0),
            direction: Vec3::new(0.0, -2.0, 0.0),
            cutoff: 10.0,
        });
        let material = Material::default().with_diffuse(Color::ONE);

        let inside = shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material);
        assert!(approx(inside, Color::ONE));

        // About 31 degrees off the spot axis
        let outside = shade(&scene, Vec3::Y, Vec3::new(3.0, 0.0, 0.0), Vec3::Y, &material);
        assert_eq!(outside, Color::ZERO);
    }

    #[test]
    fn test_spot_occluded() {
        let mut scene = Scene::new("spot shadow");
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 2.5, 0.0),
            0.5,
            Material::default(),
        ));
        scene.add_light(Light::Spot {
            color: Color::ONE,
            position: Vec3::new(0.0, 5.0, 0.0),
            direction: -Vec3::Y,
            cutoff: 30.0,
        });
        let material = Material::default().with_diffuse(Color::ONE);

        // Inside the cone but behind the sphere
        assert_eq!(shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material), Color::ZERO);

        scene.primitives[0] = Primitive::sphere(Vec3::new(3.0, 2.5, 0.0), 0.5, Material::default());
        let lit = shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::Y, &material);
        assert!(approx(lit, Color::ONE));
    }

    #[test]
    fn test_normal_is_renormalized() {
        let mut scene = Scene::new("long normal");
        scene.add_light(Light::Point {
            color: Color::ONE,
            position: Vec3::new(0.0, 5.0, 0.0),
        });
        let material = Material::default().with_diffuse(Color::splat(0.5));

        let color = shade(&scene, Vec3::Y, Vec3::ZERO, Vec3::new(0.0, 7.0, 0.0), &material);
        assert!(approx(color, Color::splat(0.5)));
    }
}
