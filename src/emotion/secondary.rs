//! Secondary emotion composition
//!
//! Every unordered pair of primary results is looked up in the adjacency
//! table. Pairs with a mapping produce a secondary emotion whose intensity
//! is the rounded mean of the two contributing intensities.

use serde::{Deserialize, Serialize};

use crate::emotion::model::{secondary_for, SecondaryEmotion};
use crate::emotion::primary::EmotionResult;

/// Secondary emotion derived from a pair of primary results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryEmotionResult {
    pub emotion: SecondaryEmotion,
    pub intensity: u8,
}

impl SecondaryEmotionResult {
    pub fn new(emotion: SecondaryEmotion, intensity: u8) -> Self {
        Self { emotion, intensity }
    }
}

/// Combine primary results pairwise, in `(i, j)` order with `i < j`
pub fn compose(primary: &[EmotionResult]) -> Vec<SecondaryEmotionResult> {
    let mut results = Vec::new();

    for (i, first) in primary.iter().enumerate() {
        for second in &primary[i + 1..] {
            if let Some(emotion) = secondary_for(first.emotion, second.emotion) {
                results.push(SecondaryEmotionResult::new(
                    emotion,
                    mean_intensity(first.intensity, second.intensity),
                ));
            }
        }
    }

    results
}

/// Mean of two intensities, halves rounded away from zero
fn mean_intensity(a: u8, b: u8) -> u8 {
    ((a as f64 + b as f64) / 2.0).round() as u8
}
