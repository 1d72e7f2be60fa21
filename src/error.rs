//! Error types for the color_emotions library

use thiserror::Error;

/// Result type alias for color_emotions operations
pub type Result<T> = std::result::Result<T, EmotionError>;

/// Error types for palette extraction and emotion analysis
#[derive(Error, Debug)]
pub enum EmotionError {
    /// Pixel buffer could not be obtained from the image
    #[error("Failed to decode pixels: {message}")]
    DecodeFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Fewer sample points than requested clusters
    #[error("Not enough data points for clustering: {points} points for {clusters} clusters")]
    InsufficientData { points: usize, clusters: usize },

    /// Palette extraction produced no colors
    #[error("No palette could be extracted from the image")]
    EmptyPalette,

    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl EmotionError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode failure without an underlying cause
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error means "nothing detected" rather than a broken call
    ///
    /// Recoverable errors are the ones a host should present as an empty
    /// result instead of a failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EmotionError::DecodeFailure { .. }
                | EmotionError::InsufficientData { .. }
                | EmotionError::EmptyPalette
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            EmotionError::EmptyPalette
            | EmotionError::DecodeFailure { .. }
            | EmotionError::InsufficientData { .. } => "No colors extracted".to_string(),
            EmotionError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            EmotionError::ConfigError { .. } => {
                "Could not read the configuration file.".to_string()
            }
            EmotionError::InvalidParameter { parameter, value } => {
                format!("Invalid setting {} = {}.", parameter, value)
            }
        }
    }
}
