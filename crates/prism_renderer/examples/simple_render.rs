//! Simple ray tracer example.
//!
//! Builds a small scene in code, renders it and saves to PPM format.

use prism_core::{Triangle, TriangleMesh};
use prism_renderer::{
    color_to_rgba, render_parallel, Camera, Color, ImageBuffer, Light, Material, Primitive, RenderConfig, Scene,
    Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    println!(
        "Scene has {} primitives ({} triangles) and {} lights",
        scene.primitive_count(),
        scene.triangle_count(),
        scene.light_count()
    );

    let camera = Camera::new(800, 450).with_fov(scene.fov);
    let config = RenderConfig::default();

    println!("Rendering {}x{} (max depth {})...", camera.width, camera.height, config.max_depth);

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, &camera, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple")
        .with_fov(50.0)
        .with_background(Color::new(0.05, 0.05, 0.15));

    // Mirror floor
    scene.add_primitive(
        Primitive::plane(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::matte(Color::splat(0.1), Color::splat(0.4)).with_reflective(Color::splat(0.4)),
        )
        .with_name("floor"),
    );

    // Glass ball in front
    scene.add_primitive(
        Primitive::sphere(
            Vec3::new(0.0, -0.2, -4.0),
            0.8,
            Material::default()
                .with_specular(Color::ONE, 80.0)
                .with_reflective(Color::splat(0.1))
                .with_transmissive(Color::splat(0.9))
                .with_refraction(1.5),
        )
        .with_name("glass"),
    );

    // Shiny red ball behind it
    scene.add_primitive(
        Primitive::sphere(
            Vec3::new(1.2, 0.0, -7.0),
            1.0,
            Material::matte(Color::new(0.1, 0.0, 0.0), Color::new(0.9, 0.1, 0.1))
                .with_specular(Color::splat(0.6), 30.0),
        )
        .with_name("red"),
    );

    // Green pyramid on the left
    let apex = Vec3::new(-1.8, 0.6, -6.0);
    let base = [
        Vec3::new(-2.6, -1.0, -5.2),
        Vec3::new(-1.0, -1.0, -5.2),
        Vec3::new(-1.0, -1.0, -6.8),
        Vec3::new(-2.6, -1.0, -6.8),
    ];
    let triangles = (0..4)
        .map(|i| Triangle::new(base[i], base[(i + 1) % 4], apex))
        .collect();
    scene.add_primitive(
        Primitive::mesh(
            TriangleMesh::new(triangles),
            Material::matte(Color::new(0.0, 0.1, 0.0), Color::new(0.2, 0.8, 0.2)),
        )
        .with_name("pyramid"),
    );

    scene.add_light(Light::Ambient {
        color: Color::splat(0.3),
    });
    scene.add_light(Light::Point {
        color: Color::splat(0.7),
        position: Vec3::new(3.0, 5.0, 0.0),
    });
    scene.add_light(Light::Spot {
        color: Color::new(0.5, 0.5, 0.3),
        position: Vec3::new(-2.0, 4.0, -3.0),
        direction: Vec3::new(0.2, -1.0, -0.5),
        cutoff: 25.0,
    });

    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let rgba = color_to_rgba(image.get(x, y));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
