//! Color handling module
//!
//! This module handles color space conversions, clustering of pixel
//! colors into a dominant palette, and palette visualization.

pub mod conversion;
pub mod kmeans;
pub mod palette_extractor;
pub mod stripe;

pub use conversion::{hsb_to_srgb, to_hsb, Hsb};
pub use kmeans::KMeansClusterer;
pub use palette_extractor::{extract_palette, PaletteExtractor};
pub use stripe::render_palette_stripe;
