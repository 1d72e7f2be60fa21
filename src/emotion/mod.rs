//! Emotion inference module
//!
//! Maps palette colors to primary emotions on a fixed hue wheel and
//! combines primaries pairwise into secondary emotions.

pub mod model;
pub mod primary;
pub mod secondary;

pub use model::{PrimaryEmotion, SecondaryEmotion};
pub use primary::{classify, EmotionResult, PrimaryEmotionClassifier};
pub use secondary::{compose, SecondaryEmotionResult};
