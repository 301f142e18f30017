//! Heightmap export as a grayscale PNG, for eyeballing a frame offline.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::ocean::HeightGrid;

/// Normalise heights to `[0, 255]` (lowest → black, highest → white).
///
/// Image X follows grid X, image Y follows grid Z. A flat grid maps to
/// mid-gray.
pub fn heightmap_image(grid: &HeightGrid) -> GrayImage {
    let stats = grid.stats();
    let range = stats.max - stats.min;

    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        let value = grid.get(x as usize, y as usize);
        let gray = if range > 0.0 {
            ((value - stats.min) / range * 255.0).round().clamp(0.0, 255.0) as u8
        } else {
            128
        };
        Luma([gray])
    })
}

pub fn write_heightmap_png(grid: &HeightGrid, path: impl AsRef<Path>) -> Result<()> {
    heightmap_image(grid).save(path.as_ref())?;
    log::info!("Wrote heightmap to {}", path.as_ref().display());
    Ok(())
}
