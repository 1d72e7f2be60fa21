//! Image loading for the formats the `image` crate decodes
//!
//! Supported formats: JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO,
//! TGA, PNM, QOI. The loader returns a `DynamicImage`; palette extraction
//! handles the conversion to RGB samples.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{EmotionError, Result};

/// Load and decode an image from disk
///
/// # Errors
///
/// Returns `EmotionError::ImageLoadError` if the file cannot be opened or
/// decoded, and `EmotionError::InvalidParameter` for unknown extensions.
///
/// # Example
///
/// ```rust,no_run
/// use color_emotions::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), color_emotions::EmotionError>(())
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_supported_extension);
    if !supported {
        return Err(EmotionError::invalid_parameter(
            "image_path",
            path.display(),
        ));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        EmotionError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        EmotionError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
