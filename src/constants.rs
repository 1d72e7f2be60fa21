//! Processing constants and thresholds for palette extraction
//!
//! Compile-time defaults for clustering and the brightness bands that
//! drive emotion intensity.

/// Clustering defaults
pub mod clustering {
    /// Palette size used when the caller does not ask for one
    pub const DEFAULT_CLUSTERS: usize = 3;

    /// Upper bound on k-means refinement passes
    pub const DEFAULT_MAX_ITERATIONS: usize = 10;
}

/// Image sampling parameters
pub mod sampling {
    /// Source images are resampled to this size before clustering
    pub const SAMPLE_WIDTH: u32 = 100;
    pub const SAMPLE_HEIGHT: u32 = 100;

    /// Bytes per pixel of the RGBA8 buffers handed over by the host
    pub const RGBA_BYTES_PER_PIXEL: usize = 4;
}

/// Brightness bands for intensity classification
///
/// The scale is inverted: darker colors carry a higher intensity.
pub mod intensity {
    /// Brightness at or below this value maps to intensity 3
    pub const DARK_BRIGHTNESS_MAX: f64 = 0.33;

    /// Brightness at or above this value maps to intensity 1
    pub const LIGHT_BRIGHTNESS_MIN: f64 = 0.67;

    pub const DARK: u8 = 3;
    pub const MEDIUM: u8 = 2;
    pub const LIGHT: u8 = 1;
}

/// Palette stripe rendering defaults
pub mod rendering {
    pub const STRIPE_WIDTH: u32 = 300;
    pub const STRIPE_HEIGHT: u32 = 60;
}
