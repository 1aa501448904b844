//! Image-level rendering on top of the [`Tracer`].
//!
//! Pixels are addressed with (0, 0) at the bottom-left, matching the
//! [`Camera`]. Scanlines are traced bottom to top; the resulting
//! [`ImageBuffer`] stores its top row first so it can be written out directly.

use crate::tracer::{Tracer, DEFAULT_MAX_DEPTH};
use prism_core::{Color, Scene};
use prism_math::{Camera, Vec3};
use rayon::prelude::*;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Maximum ray recursion depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    fn tracer<'a>(&self, scene: &'a Scene) -> Tracer<'a> {
        Tracer::new(scene).with_max_depth(self.max_depth)
    }
}

/// Trace a single ray from `eye` through `through`.
///
/// Returns whether anything was hit, plus the colour to display. A miss
/// yields the scene background.
pub fn shade_pixel(scene: &Scene, config: &RenderConfig, eye: Vec3, through: Vec3) -> (bool, Color) {
    match config.tracer(scene).trace(eye, through) {
        Some(color) => (true, color),
        None => (false, scene.background),
    }
}

/// Colour of pixel (x, y).
pub fn render_pixel(scene: &Scene, camera: &Camera, config: &RenderConfig, x: u32, y: u32) -> Color {
    shade_pixel(scene, config, camera.eye, camera.through_point(x, y)).1
}

/// Clamp to [0, 1] and convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y), counted from the top-left.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), counted from the top-left.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Store a finished scanline given in camera coordinates (y = 0 at the bottom).
    fn set_scanline(&mut self, y: u32, scanline: &[Color]) {
        let start = self.index(0, self.height - 1 - y);
        self.pixels[start..start + scanline.len()].copy_from_slice(scanline);
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(color_to_rgba(self.get(x, y)))
        })
    }
}

fn trace_scanline(tracer: &Tracer, camera: &Camera, y: u32, scanline: &mut [Color]) {
    let background = tracer.scene().background;
    for (x, pixel) in scanline.iter_mut().enumerate() {
        *pixel = tracer
            .trace(camera.eye, camera.through_point(x as u32, y))
            .unwrap_or(background);
    }
}

/// Render the scene bottom to top, handing each finished scanline to
/// `on_scanline` together with its camera row.
pub fn render_scanlines<F>(scene: &Scene, camera: &Camera, config: &RenderConfig, mut on_scanline: F) -> ImageBuffer
where
    F: FnMut(u32, &[Color]),
{
    let mut image = ImageBuffer::new(camera.width, camera.height);
    let tracer = config.tracer(scene);
    let mut scanline = vec![Color::ZERO; camera.width as usize];

    log::info!(
        "Rendering '{}' at {}x{} (max depth {})",
        scene.name,
        camera.width,
        camera.height,
        config.max_depth
    );
    let start = Instant::now();

    for y in 0..camera.height {
        trace_scanline(&tracer, camera, y, &mut scanline);
        image.set_scanline(y, &scanline);
        on_scanline(y, &scanline);
        log::debug!("Scanline {}/{} done", y + 1, camera.height);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    render_scanlines(scene, camera, config, |_, _| {})
}

/// Render with one rayon task per scanline. Produces the same pixels as
/// [`render`].
pub fn render_parallel(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.width, camera.height);
    if image.pixels.is_empty() {
        return image;
    }

    let tracer = config.tracer(scene);
    let height = camera.height;

    log::info!(
        "Rendering '{}' at {}x{} on {} threads (max depth {})",
        scene.name,
        camera.width,
        camera.height,
        rayon::current_num_threads(),
        config.max_depth
    );
    let start = Instant::now();

    image
        .pixels
        .par_chunks_mut(camera.width as usize)
        .enumerate()
        .for_each(|(row, scanline)| {
            trace_scanline(&tracer, camera, height - 1 - row as u32, scanline);
        });

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
