// Sentiment oracle trait: the swap-ready abstraction.
//
// The engine treats sentiment scoring as a black box: give it text, get back
// a polarity and a subjectivity. The built-in implementation is a lexicon
// scorer; anything else (a remote API, a model) plugs in through this trait.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The result of scoring a single piece of text for sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Signed strength from -1.0 (very negative) to 1.0 (very positive)
    pub polarity: f64,
    /// From 0.0 (objective) to 1.0 (very subjective). The engine ignores it.
    pub subjectivity: f64,
}

/// Which sentiment bucket a polarity lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Bucket a polarity against a symmetric threshold. Both bounds are
    /// exclusive: a polarity of exactly `threshold` is neutral.
    pub fn from_polarity(polarity: f64, threshold: f64) -> Self {
        if polarity > threshold {
            Tone::Positive
        } else if polarity < -threshold {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

/// Trait for scoring text sentiment. Synchronous: the engine processes a
/// batch to completion without suspending.
pub trait SentimentOracle: Send + Sync {
    fn score_text(&self, text: &str) -> Result<SentimentScore>;
}
