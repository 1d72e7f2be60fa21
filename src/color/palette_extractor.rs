//! Dominant color palette extraction
//!
//! Resamples the source image to a small fixed grid, decodes it to RGB
//! points (alpha dropped) and clusters those points with k-means. The
//! centroids, in clusterer order, form the palette.

use image::{DynamicImage, RgbaImage};
use palette::Srgb;
use tracing::{debug, warn};

use crate::color::conversion::{point_to_srgb, rgb8_to_point};
use crate::color::kmeans::{KMeansClusterer, Point};
use crate::config::{PipelineConfig, ResizeFilter};
use crate::constants::{clustering, sampling};
use crate::{EmotionError, Result};

/// Palette extractor with a fixed sampling grid and clusterer
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    clusterer: KMeansClusterer,
    sample_width: u32,
    sample_height: u32,
    filter: ResizeFilter,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new(clustering::DEFAULT_CLUSTERS)
    }
}

impl PaletteExtractor {
    /// Create an extractor producing `n_clusters` colors on the default 100×100 grid
    pub fn new(n_clusters: usize) -> Self {
        Self {
            clusterer: KMeansClusterer::new(n_clusters),
            sample_width: sampling::SAMPLE_WIDTH,
            sample_height: sampling::SAMPLE_HEIGHT,
            filter: ResizeFilter::default(),
        }
    }

    /// Create an extractor from pipeline settings
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            clusterer: KMeansClusterer::new(config.n_clusters)
                .with_max_iterations(config.max_iterations)
                .with_optional_seed(config.seed),
            sample_width: config.sample_width,
            sample_height: config.sample_height,
            filter: config.resize_filter,
        }
    }

    /// Replace the clusterer, e.g. to pin a seed
    pub fn with_clusterer(mut self, clusterer: KMeansClusterer) -> Self {
        self.clusterer = clusterer;
        self
    }

    pub fn with_sample_size(mut self, width: u32, height: u32) -> Self {
        self.sample_width = width;
        self.sample_height = height;
        self
    }

    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn n_clusters(&self) -> usize {
        self.clusterer.k()
    }

    /// Extract the palette of an image
    ///
    /// # Errors
    ///
    /// - `DecodeFailure` if the image has no pixels
    /// - `InvalidParameter` if the sampling grid is empty
    /// - `InsufficientData` if the grid holds fewer pixels than clusters
    pub fn extract(&self, image: &DynamicImage) -> Result<Vec<Srgb<f64>>> {
        if image.width() == 0 || image.height() == 0 {
            return Err(EmotionError::decode(format!(
                "image has no pixels ({}x{})",
                image.width(),
                image.height()
            )));
        }
        if self.sample_width == 0 || self.sample_height == 0 {
            return Err(EmotionError::invalid_parameter(
                "sample_size",
                format!("{}x{}", self.sample_width, self.sample_height),
            ));
        }

        let points = self.sample_points(image);
        debug!(
            source_width = image.width(),
            source_height = image.height(),
            samples = points.len(),
            "sampled image for clustering"
        );

        let centroids = self.clusterer.cluster(&points)?;
        Ok(centroids.into_iter().map(point_to_srgb).collect())
    }

    /// Extract the palette of a raw RGBA8 buffer
    ///
    /// `rgba` must hold exactly `width * height * 4` bytes.
    pub fn extract_from_rgba(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<Srgb<f64>>> {
        let image = rgba_to_image(width, height, rgba)?;
        self.extract(&image)
    }

    /// Extract the palette, logging and swallowing any failure
    ///
    /// An empty result means "no palette available".
    pub fn extract_or_empty(&self, image: &DynamicImage) -> Vec<Srgb<f64>> {
        self.extract(image).unwrap_or_else(|err| {
            warn!(error = %err, "palette extraction failed");
            Vec::new()
        })
    }

    fn sample_points(&self, image: &DynamicImage) -> Vec<Point> {
        let resized = image.resize_exact(
            self.sample_width,
            self.sample_height,
            self.filter.filter_type(),
        );
        resized
            .to_rgb8()
            .pixels()
            .map(|pixel| rgb8_to_point(pixel.0))
            .collect()
    }
}

/// Wrap a raw RGBA8 buffer as an image
pub fn rgba_to_image(width: u32, height: u32, rgba: &[u8]) -> Result<DynamicImage> {
    let expected = width as usize * height as usize * sampling::RGBA_BYTES_PER_PIXEL;
    if rgba.len() != expected {
        return Err(EmotionError::decode(format!(
            "RGBA buffer holds {} bytes, expected {} for {}x{}",
            rgba.len(),
            expected,
            width,
            height
        )));
    }

    RgbaImage::from_raw(width, height, rgba.to_vec())
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| EmotionError::decode("RGBA buffer could not be wrapped as an image"))
}

/// Extract `n_clusters` dominant colors, or nothing if extraction fails
pub fn extract_palette(image: &DynamicImage, n_clusters: usize) -> Vec<Srgb<f64>> {
    PaletteExtractor::new(n_clusters).extract_or_empty(image)
}
