//! Prism command-line front end.
//!
//! Loads a JSON scene, renders it at the requested size and writes a PNG.
//! With `--pick X,Y` a single pixel is traced and reported instead, which
//! is handy for checking what a ray hits.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use prism_core::load_scene;
use prism_math::Camera;
use prism_renderer::{render, render_parallel, shade_pixel, RenderConfig, Scene};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Prism");

    let scene = load_scene(&args.scene).with_context(|| format!("failed to load scene {}", args.scene))?;
    let camera = Camera::new(args.width, args.height).with_fov(scene.fov);
    let config = RenderConfig {
        max_depth: args.max_depth,
    };

    if let Some((x, y)) = args.pick {
        return pick(&scene, &camera, &config, x, y);
    }

    let image = if args.parallel {
        render_parallel(&scene, &camera, &config)
    } else {
        render(&scene, &camera, &config)
    };

    image
        .to_image()
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output))?;
    log::info!("Saved {}", args.output);

    Ok(())
}

/// Trace one pixel and print what it sees.
fn pick(scene: &Scene, camera: &Camera, config: &RenderConfig, x: u32, y: u32) -> Result<()> {
    anyhow::ensure!(
        x < camera.width && y < camera.height,
        "pixel {},{} is outside the {}x{} viewport",
        x,
        y,
        camera.width,
        camera.height
    );

    let through = camera.through_point(x, y);
    let (hit, color) = shade_pixel(scene, config, camera.eye, through);

    println!("{} at pixel {},{}", if hit { "HIT" } else { "MISS" }, x, y);
    println!("through ({:.4}, {:.4}, {:.4})", through.x, through.y, through.z);
    println!("color ({:.4}, {:.4}, {:.4})", color.x, color.y, color.z);

    Ok(())
}
