//! PNG rendering of the canvas with transparent unpainted cells

use std::fs;
use std::path::Path;

use image::{ImageFormat, Rgb, Rgba, RgbaImage};

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::canvas::Canvas;
use crate::spatial::grid::Point;

/// Incrementally painted RGBA image
///
/// Starts fully transparent; every painted pixel becomes opaque.
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    image: RgbaImage,
}

impl ImageRenderer {
    /// Transparent image of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: RgbaImage::new(width as u32, height as u32),
        }
    }

    /// Paint one pixel; points outside the image are ignored
    pub fn paint(&mut self, point: Point, color: Rgb<u8>) {
        let Rgb([red, green, blue]) = color;
        if let Some(pixel) = self
            .image
            .get_pixel_mut_checked(point.x as u32, point.y as u32)
        {
            *pixel = Rgba([red, green, blue, u8::MAX]);
        }
    }

    /// Image painted so far
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the painted image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Render every occupied cell of a canvas
pub fn canvas_to_image(canvas: &Canvas) -> RgbaImage {
    let grid = canvas.grid();
    let mut renderer = ImageRenderer::new(grid.width(), grid.height());

    for point in canvas.occupied_points() {
        if let Some(color) = canvas.color_at(point) {
            renderer.paint(point, color);
        }
    }

    renderer.into_image()
}

/// Write an image as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| AlgorithmError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
