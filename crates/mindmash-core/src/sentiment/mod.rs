//! Sentiment scoring and the emotion labels derived from it.
//!
//! - `lexicon`: deterministic keyword-based analyzer
//! - `emotion`: score → coarse emotion label mapping

mod emotion;
mod lexicon;

pub use emotion::Emotion;
pub use lexicon::LexiconSentimentAnalyzer;

use serde::{Deserialize, Serialize};

/// Sentiment of a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// 0.0 = very negative, 1.0 = very positive
    pub score: f64,
    pub label: String,
}

impl Sentiment {
    pub fn new(score: f64, label: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            label: label.into(),
        }
    }

    /// Emotion label for this score.
    pub fn emotion(&self) -> Emotion {
        Emotion::from_score(self.score)
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::new(0.6, "Neutral")
    }
}

/// Scores text sentiment.
///
/// Implementations must be deterministic: identical input yields an
/// identical result.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Sentiment;
}
