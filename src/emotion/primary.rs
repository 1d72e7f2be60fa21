//! Primary emotion classification
//!
//! Each palette color is matched to the anchor whose hue is closest by
//! plain absolute difference. The distance does not wrap around the color
//! wheel, so a hue of 350° is 350° away from Anger at 0° and lands on
//! Disgust. Intensity comes from brightness on an inverted scale: the
//! darker the color, the higher the intensity.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::conversion::to_hsb;
use crate::constants::intensity;
use crate::emotion::model::{PrimaryAnchor, PrimaryEmotion, PRIMARY_EMOTION_ANCHORS};

/// Primary emotion detected for one palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: PrimaryEmotion,
    /// 1 (light) to 3 (dark)
    pub intensity: u8,
}

impl EmotionResult {
    pub fn new(emotion: PrimaryEmotion, intensity: u8) -> Self {
        Self { emotion, intensity }
    }
}

/// Classifier over a fixed anchor table
#[derive(Debug, Clone)]
pub struct PrimaryEmotionClassifier {
    anchors: &'static [PrimaryAnchor],
}

impl Default for PrimaryEmotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimaryEmotionClassifier {
    pub fn new() -> Self {
        Self {
            anchors: &PRIMARY_EMOTION_ANCHORS,
        }
    }

    /// Classify every palette color, preserving palette order
    pub fn classify(&self, palette: &[Srgb<f64>]) -> Vec<EmotionResult> {
        palette.iter().map(|&color| self.classify_color(color)).collect()
    }

    pub fn classify_color(&self, color: Srgb<f64>) -> EmotionResult {
        let hsb = to_hsb(color);
        EmotionResult::new(self.nearest_emotion(hsb.hue), intensity_for(hsb.brightness))
    }

    /// Anchor with the smallest absolute hue difference; earlier entries win ties
    pub fn nearest_emotion(&self, hue: f64) -> PrimaryEmotion {
        let mut best = self.anchors[0];
        for anchor in &self.anchors[1..] {
            if (anchor.hue - hue).abs() < (best.hue - hue).abs() {
                best = *anchor;
            }
        }
        best.emotion
    }
}

/// Map brightness to intensity: ≤ 0.33 → 3, ≥ 0.67 → 1, otherwise 2
pub fn intensity_for(brightness: f64) -> u8 {
    if brightness <= intensity::DARK_BRIGHTNESS_MAX {
        intensity::DARK
    } else if brightness >= intensity::LIGHT_BRIGHTNESS_MIN {
        intensity::LIGHT
    } else {
        intensity::MEDIUM
    }
}

/// Classify a palette with the standard anchor table
pub fn classify(palette: &[Srgb<f64>]) -> Vec<EmotionResult> {
    PrimaryEmotionClassifier::new().classify(palette)
}
