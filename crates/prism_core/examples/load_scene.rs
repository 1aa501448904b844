//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/c.json

use std::env;

use prism_core::{load_scene, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-json-file>");
        println!("\nExamples:");
        println!("  cargo run --example load_scene -- scenes/a.json");
        println!("  cargo run --example load_scene -- scenes/c.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Field of view: {} degrees", scene.fov);
            println!("Background: {:?}", scene.background);
            println!("Primitives: {}", scene.primitive_count());
            println!("Total triangles: {}", scene.triangle_count());

            println!("\n--- Primitives ---");
            for (index, primitive) in scene.primitives.iter().enumerate() {
                let name = primitive.name.as_deref().unwrap_or("-");
                match &primitive.shape {
                    Shape::Sphere(sphere) => println!(
                        "  [{}] {} sphere at {:?}, radius {}",
                        index, name, sphere.center, sphere.radius
                    ),
                    Shape::Plane(plane) => println!(
                        "  [{}] {} plane through {:?}, normal {:?}",
                        index, name, plane.point, plane.normal
                    ),
                    Shape::Mesh(mesh) => println!(
                        "  [{}] {} mesh, {} triangles",
                        index,
                        name,
                        mesh.triangle_count()
                    ),
                }
            }

            println!("\n--- Lights ---");
            for light in &scene.lights {
                println!("  {} {:?}", light.kind(), light.color());
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
