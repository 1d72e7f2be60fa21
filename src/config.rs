//! Configuration for the color emotion pipeline.
//!
//! All tunable parameters for palette extraction and rendering live in
//! [`PipelineConfig`]. Configuration can be loaded from JSON files or
//! constructed programmatically:
//!
//! ```no_run
//! use color_emotions::PipelineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PipelineConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = PipelineConfig::default();
//! # Ok::<(), color_emotions::EmotionError>(())
//! ```
//!
//! Fields missing from a JSON file take their default values.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{clustering, rendering, sampling};
use crate::{EmotionError, Result};

/// Complete pipeline configuration.
///
/// Serializable to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of palette colors (k)
    pub n_clusters: usize,

    /// Maximum k-means refinement passes
    pub max_iterations: usize,

    /// Width of the resampled image fed to clustering
    pub sample_width: u32,

    /// Height of the resampled image fed to clustering
    pub sample_height: u32,

    /// Resampling filter used to shrink (or grow) the source image
    pub resize_filter: ResizeFilter,

    /// Seed for centroid initialization; `None` draws from the OS
    pub seed: Option<u64>,

    /// Palette stripe canvas width
    pub stripe_width: u32,

    /// Palette stripe canvas height
    pub stripe_height: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_clusters: clustering::DEFAULT_CLUSTERS,
            max_iterations: clustering::DEFAULT_MAX_ITERATIONS,
            sample_width: sampling::SAMPLE_WIDTH,
            sample_height: sampling::SAMPLE_HEIGHT,
            resize_filter: ResizeFilter::default(),
            seed: None,
            stripe_width: rendering::STRIPE_WIDTH,
            stripe_height: rendering::STRIPE_HEIGHT,
        }
    }
}

/// Resampling filter names accepted in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    /// Pick the closest source pixel, no blending
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl PipelineConfig {
    /// Default configuration with a pinned seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check that every parameter is usable
    ///
    /// A grid holding fewer samples than clusters is not rejected here; it
    /// yields an empty palette at extraction time.
    pub fn validate(&self) -> Result<()> {
        if self.n_clusters == 0 {
            return Err(EmotionError::invalid_parameter("n_clusters", self.n_clusters));
        }
        if self.max_iterations == 0 {
            return Err(EmotionError::invalid_parameter(
                "max_iterations",
                self.max_iterations,
            ));
        }
        if self.sample_width == 0 || self.sample_height == 0 {
            return Err(EmotionError::invalid_parameter(
                "sample_size",
                format!("{}x{}", self.sample_width, self.sample_height),
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EmotionError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            EmotionError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EmotionError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            EmotionError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
