//! # Color Emotions
//!
//! A Rust crate for reading the emotional tone of an image from its colors.
//!
//! This library infers emotions in three steps:
//! - Extracting a small palette of dominant colors with k-means clustering
//! - Matching each palette color to a primary emotion on a fixed hue wheel,
//!   with an intensity derived from brightness
//! - Combining pairs of primary emotions into secondary emotions
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_emotions::{analyze_file, PipelineConfig};
//! use std::path::Path;
//!
//! let report = analyze_file(Path::new("photo.jpg"), &PipelineConfig::default())?;
//! println!("{}", report.summary());
//! # Ok::<(), color_emotions::EmotionError>(())
//! ```

use std::path::Path;
use std::time::Instant;

use image::DynamicImage;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod color;
pub mod config;
pub mod constants;
pub mod emotion;
pub mod error;
pub mod image_loader;

pub use color::{
    extract_palette, render_palette_stripe, to_hsb, Hsb, KMeansClusterer, PaletteExtractor,
};
pub use config::{PipelineConfig, ResizeFilter};
pub use emotion::{
    classify, compose, EmotionResult, PrimaryEmotion, PrimaryEmotionClassifier, SecondaryEmotion,
    SecondaryEmotionResult,
};
pub use error::{EmotionError, Result};

/// One palette entry with display representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// sRGB color, channels in [0, 1]
    pub srgb: Srgb<f64>,
    /// Hexadecimal color representation
    pub hex: String,
    /// Hue/saturation/brightness view
    pub hsb: Hsb,
}

impl From<Srgb<f64>> for PaletteColor {
    fn from(srgb: Srgb<f64>) -> Self {
        Self {
            srgb,
            hex: color::conversion::srgb_to_hex(srgb),
            hsb: to_hsb(srgb),
        }
    }
}

/// Complete emotion analysis of one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReport {
    /// Dominant colors, in clusterer order
    pub palette: Vec<PaletteColor>,
    /// One primary emotion per palette color, same order
    pub primary: Vec<EmotionResult>,
    /// Secondary emotions from pairs of primaries
    pub secondary: Vec<SecondaryEmotionResult>,
}

impl EmotionReport {
    /// Classify and compose emotions for an already extracted palette
    pub fn from_palette(palette: &[Srgb<f64>]) -> Self {
        let primary = classify(palette);
        let secondary = compose(&primary);
        Self {
            palette: palette.iter().copied().map(PaletteColor::from).collect(),
            primary,
            secondary,
        }
    }

    /// Palette colors as plain sRGB values
    pub fn colors(&self) -> Vec<Srgb<f64>> {
        self.palette.iter().map(|c| c.srgb).collect()
    }

    /// Human readable summary, e.g.
    ///
    /// ```text
    /// Primary Emotions:
    /// Joy (1), Trust (3)
    ///
    /// Secondary Emotions:
    /// Love (2)
    /// ```
    pub fn summary(&self) -> String {
        let primary = self
            .primary
            .iter()
            .map(|r| format!("{} ({})", r.emotion, r.intensity))
            .collect::<Vec<_>>()
            .join(", ");
        let secondary = self
            .secondary
            .iter()
            .map(|r| format!("{} ({})", r.emotion, r.intensity))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Primary Emotions:\n{}\n\nSecondary Emotions:\n{}",
            primary, secondary
        )
    }
}

/// Analyze a decoded image
///
/// # Errors
///
/// Returns `EmotionError::InvalidParameter` for an unusable configuration
/// and `EmotionError::EmptyPalette` when no palette could be extracted
/// (undecodable image, fewer samples than clusters).
pub fn analyze_image(image: &DynamicImage, config: &PipelineConfig) -> Result<EmotionReport> {
    config.validate()?;
    let started = Instant::now();

    let palette = PaletteExtractor::from_config(config).extract_or_empty(image);
    if palette.is_empty() {
        return Err(EmotionError::EmptyPalette);
    }

    let report = EmotionReport::from_palette(&palette);
    debug!(
        colors = report.palette.len(),
        primary = report.primary.len(),
        secondary = report.secondary.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "emotion analysis complete"
    );
    Ok(report)
}

/// Analyze a raw RGBA8 bitmap of `width` × `height` pixels
pub fn analyze_rgba(
    width: u32,
    height: u32,
    rgba: &[u8],
    config: &PipelineConfig,
) -> Result<EmotionReport> {
    let image = match color::palette_extractor::rgba_to_image(width, height, rgba) {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(error = %err, "could not decode RGBA buffer");
            return Err(EmotionError::EmptyPalette);
        }
    };
    analyze_image(&image, config)
}

/// Load an image file and analyze it
pub fn analyze_file(path: &Path, config: &PipelineConfig) -> Result<EmotionReport> {
    let image = image_loader::load_image(path)?;
    analyze_image(&image, config)
}
