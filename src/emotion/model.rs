//! Reference tables of the color emotion model
//!
//! Eight primary emotions are anchored to hues on the color wheel, and
//! 24 unordered pairs of primaries combine into secondary emotions. Both
//! tables are fixed data shared read-only by every analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base emotion anchored to a reference hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryEmotion {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

impl PrimaryEmotion {
    pub fn name(self) -> &'static str {
        match self {
            PrimaryEmotion::Joy => "Joy",
            PrimaryEmotion::Trust => "Trust",
            PrimaryEmotion::Fear => "Fear",
            PrimaryEmotion::Surprise => "Surprise",
            PrimaryEmotion::Sadness => "Sadness",
            PrimaryEmotion::Disgust => "Disgust",
            PrimaryEmotion::Anger => "Anger",
            PrimaryEmotion::Anticipation => "Anticipation",
        }
    }
}

impl fmt::Display for PrimaryEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Emotion formed by combining two primaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryEmotion {
    Love,
    Submission,
    Awe,
    Rejection,
    Remorse,
    Contempt,
    Aggressiveness,
    Optimism,
    Fate,
    Guilt,
    Curiosity,
    Despair,
    Indignation,
    Grief,
    Sarcasm,
    Pride,
    Anxiety,
    Astonishment,
    Sentimentality,
    Shame,
    Hatred,
    Pessimism,
    Unhealthiness,
    Superiority,
}

impl SecondaryEmotion {
    pub fn name(self) -> &'static str {
        match self {
            SecondaryEmotion::Love => "Love",
            SecondaryEmotion::Submission => "Submission",
            SecondaryEmotion::Awe => "Awe",
            SecondaryEmotion::Rejection => "Rejection",
            SecondaryEmotion::Remorse => "Remorse",
            SecondaryEmotion::Contempt => "Contempt",
            SecondaryEmotion::Aggressiveness => "Aggressiveness",
            SecondaryEmotion::Optimism => "Optimism",
            SecondaryEmotion::Fate => "Fate",
            SecondaryEmotion::Guilt => "Guilt",
            SecondaryEmotion::Curiosity => "Curiosity",
            SecondaryEmotion::Despair => "Despair",
            SecondaryEmotion::Indignation => "Indignation",
            SecondaryEmotion::Grief => "Grief",
            SecondaryEmotion::Sarcasm => "Sarcasm",
            SecondaryEmotion::Pride => "Pride",
            SecondaryEmotion::Anxiety => "Anxiety",
            SecondaryEmotion::Astonishment => "Astonishment",
            SecondaryEmotion::Sentimentality => "Sentimentality",
            SecondaryEmotion::Shame => "Shame",
            SecondaryEmotion::Hatred => "Hatred",
            SecondaryEmotion::Pessimism => "Pessimism",
            SecondaryEmotion::Unhealthiness => "Unhealthiness",
            SecondaryEmotion::Superiority => "Superiority",
        }
    }
}

impl fmt::Display for SecondaryEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A primary emotion and its anchor hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryAnchor {
    pub emotion: PrimaryEmotion,
    pub hue: f64,
}

const fn anchor(emotion: PrimaryEmotion, hue: f64) -> PrimaryAnchor {
    PrimaryAnchor { emotion, hue }
}

/// Primary emotion anchors, in classification priority order
///
/// When a hue sits exactly between two anchors the earlier entry wins.
pub const PRIMARY_EMOTION_ANCHORS: [PrimaryAnchor; 8] = [
    anchor(PrimaryEmotion::Joy, 60.0),
    anchor(PrimaryEmotion::Trust, 120.0),
    anchor(PrimaryEmotion::Fear, 180.0),
    anchor(PrimaryEmotion::Surprise, 210.0),
    anchor(PrimaryEmotion::Sadness, 240.0),
    anchor(PrimaryEmotion::Disgust, 300.0),
    anchor(PrimaryEmotion::Anger, 0.0),
    anchor(PrimaryEmotion::Anticipation, 30.0),
];

use PrimaryEmotion::*;
use SecondaryEmotion as S;

/// Unordered primary pairs and the secondary emotion they form
pub const SECONDARY_ADJACENCY: [(PrimaryEmotion, PrimaryEmotion, SecondaryEmotion); 24] = [
    (Joy, Trust, S::Love),
    (Trust, Fear, S::Submission),
    (Fear, Surprise, S::Awe),
    (Surprise, Sadness, S::Rejection),
    (Sadness, Disgust, S::Remorse),
    (Disgust, Anger, S::Contempt),
    (Anger, Anticipation, S::Aggressiveness),
    (Anticipation, Joy, S::Optimism),
    (Anticipation, Trust, S::Fate),
    (Joy, Fear, S::Guilt),
    (Trust, Surprise, S::Curiosity),
    (Fear, Sadness, S::Despair),
    (Surprise, Disgust, S::Indignation),
    (Sadness, Anger, S::Grief),
    (Disgust, Anticipation, S::Sarcasm),
    (Anger, Joy, S::Pride),
    (Anticipation, Fear, S::Anxiety),
    (Joy, Surprise, S::Astonishment),
    (Trust, Sadness, S::Sentimentality),
    (Fear, Disgust, S::Shame),
    (Surprise, Anger, S::Hatred),
    (Sadness, Anticipation, S::Pessimism),
    (Disgust, Joy, S::Unhealthiness),
    (Anger, Trust, S::Superiority),
];

/// Look up the secondary emotion formed by two primaries, in either order
pub fn secondary_for(a: PrimaryEmotion, b: PrimaryEmotion) -> Option<SecondaryEmotion> {
    SECONDARY_ADJACENCY
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|&(_, _, secondary)| secondary)
}

/// Anchor hue of a primary emotion
pub fn anchor_hue(emotion: PrimaryEmotion) -> f64 {
    PRIMARY_EMOTION_ANCHORS
        .iter()
        .find(|anchor| anchor.emotion == emotion)
        .map(|anchor| anchor.hue)
        .unwrap_or_default()
}
