//! Color space conversion utilities
//!
//! Provides the conversions the emotion pipeline relies on:
//! - 8-bit pixels to normalized sRGB points
//! - sRGB to HSB (hue, saturation, brightness) and back
//! - Hex color representation
//!
//! Colors are kept in `f64` from sampling through classification.

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

/// Hue/saturation/brightness view of a color
///
/// Hue is in degrees `[0, 360)`, saturation and brightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

/// Convert an sRGB color to its HSB view
///
/// Achromatic colors (r = g = b) get hue 0.
pub fn to_hsb(color: Srgb<f64>) -> Hsb {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::from_color(color);
    let hue = if hsv.saturation == 0.0 {
        0.0
    } else {
        hsv.hue.into_positive_degrees()
    };
    // Tiny negative angles normalize up to exactly 360
    let hue = if hue >= 360.0 { 0.0 } else { hue };

    Hsb::new(hue, hsv.saturation, hsv.value)
}

/// Convert an HSB color back to sRGB
pub fn hsb_to_srgb(hsb: Hsb) -> Srgb<f64> {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(hsb.hue, hsb.saturation, hsb.brightness);
    Srgb::from_color(hsv)
}

/// Decode an 8-bit RGB pixel into a normalized point
pub fn rgb8_to_point(pixel: [u8; 3]) -> [f64; 3] {
    [
        pixel[0] as f64 / 255.0,
        pixel[1] as f64 / 255.0,
        pixel[2] as f64 / 255.0,
    ]
}

pub fn point_to_srgb(point: [f64; 3]) -> Srgb<f64> {
    Srgb::new(point[0], point[1], point[2])
}

/// Convert sRGB to hexadecimal color string (e.g. "#FF0000")
pub fn srgb_to_hex(srgb: Srgb<f64>) -> String {
    let [r, g, b] = srgb_to_rgb8(srgb);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Quantize to 8-bit channels, clamping out-of-range values
pub fn srgb_to_rgb8(srgb: Srgb<f64>) -> [u8; 3] {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(srgb.red), channel(srgb.green), channel(srgb.blue)]
}
