//! Palette stripe rendering
//!
//! Paints a palette as equal-width vertical stripes, left to right in
//! palette order.

use std::path::Path;

use image::{Rgba, RgbaImage};
use palette::Srgb;

use crate::color::conversion::srgb_to_rgb8;
use crate::{EmotionError, Result};

/// Render `colors` as vertical stripes on a `width` × `height` canvas
///
/// Column `x` belongs to stripe `x * colors.len() / width`. Stripes are
/// opaque; an empty palette leaves the canvas fully transparent.
pub fn render_palette_stripe(colors: &[Srgb<f64>], width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    if colors.is_empty() || width == 0 {
        return canvas;
    }

    let fills: Vec<Rgba<u8>> = colors.iter().map(|&color| opaque(color)).collect();
    let stripes = fills.len() as u64;

    for (x, _, pixel) in canvas.enumerate_pixels_mut() {
        let stripe = (x as u64 * stripes / width as u64) as usize;
        *pixel = fills[stripe.min(fills.len() - 1)];
    }

    canvas
}

/// Render the palette stripe and write it as a PNG
pub fn save_palette_stripe(colors: &[Srgb<f64>], width: u32, height: u32, path: &Path) -> Result<()> {
    render_palette_stripe(colors, width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| {
            EmotionError::image_load(format!("Failed to write stripe to {}", path.display()), e)
        })
}

fn opaque(color: Srgb<f64>) -> Rgba<u8> {
    let [r, g, b] = srgb_to_rgb8(color);
    Rgba([r, g, b, 255])
}
