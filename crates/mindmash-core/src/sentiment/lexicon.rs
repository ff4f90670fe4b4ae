//! Keyword-based sentiment analysis (fast, no model call).

use std::collections::HashSet;

use super::{Sentiment, SentimentAnalyzer};

const POSITIVE_KW: &[&str] = &[
    "good",
    "great",
    "awesome",
    "amazing",
    "love",
    "like",
    "thanks",
    "thank",
    "happy",
    "glad",
    "wonderful",
    "excellent",
    "nice",
    "cool",
    "perfect",
    "fascinating",
    "interesting",
    "elegant",
    "optimal",
    "improved",
    "promising",
    "inspire",
    "inspired",
    "innovative",
    "novel",
    "consensus",
    "complete",
    "appreciate",
    "success",
    "reliable",
    "helpful",
];

const NEGATIVE_KW: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "angry",
    "sad",
    "worst",
    "broken",
    "fail",
    "failed",
    "failure",
    "error",
    "bug",
    "crash",
    "problem",
    "wrong",
    "annoying",
    "frustrated",
    "slow",
    "corruption",
    "race",
    "ugly",
    "useless",
    "confused",
];

const NEGATORS: &[&str] = &["not", "no", "never", "don't", "isn't", "wasn't", "can't"];

/// Per-hit adjustment applied to the neutral baseline.
const STEP: f64 = 0.1;
const BASELINE: f64 = 0.5;

/// Lexicon analyzer: counts positive and negative keywords.
///
/// A keyword preceded by a negator ("not good") counts for the opposite
/// polarity. The score starts at 0.5 and moves by a fixed step per hit.
pub struct LexiconSentimentAnalyzer {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negators: HashSet<&'static str>,
}

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_KW.iter().copied().collect(),
            negative: NEGATIVE_KW.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    fn label_for(score: f64) -> &'static str {
        if score >= 0.55 {
            "Positive"
        } else if score <= 0.45 {
            "Negative"
        } else {
            "Neutral"
        }
    }
}

impl Default for LexiconSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .collect();

        let mut balance: i32 = 0;
        for (i, word) in words.iter().enumerate() {
            let polarity = if self.positive.contains(word) {
                1
            } else if self.negative.contains(word) {
                -1
            } else {
                continue;
            };
            let negated = i > 0 && self.negators.contains(&words[i - 1]);
            balance += if negated { -polarity } else { polarity };
        }

        let score = (BASELINE + STEP * f64::from(balance)).clamp(0.0, 1.0);
        Sentiment::new(score, Self::label_for(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Emotion;

    fn analyze(text: &str) -> Sentiment {
        LexiconSentimentAnalyzer::new().analyze(text)
    }

    #[test]
    fn test_neutral_text() {
        let s = analyze("The meeting is at noon.");
        assert_eq!(s.score, 0.5);
        assert_eq!(s.label, "Neutral");
        assert_eq!(s.emotion(), Emotion::Neutral);
    }

    #[test]
    fn test_positive_text() {
        let s = analyze("This is great, thanks! Really awesome work.");
        assert!(s.score >= 0.7, "{}", s.score);
        assert_eq!(s.label, "Positive");
        assert_eq!(s.emotion(), Emotion::Joy);
    }

    #[test]
    fn test_negative_text() {
        let s = analyze("Terrible, broken and slow. I hate it.");
        assert!(s.score <= 0.3, "{}", s.score);
        assert_eq!(s.label, "Negative");
        assert_eq!(s.emotion(), Emotion::Anger);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(analyze("not good").score < 0.5);
        assert!(analyze("never slow").score > 0.5);
    }

    #[test]
    fn test_score_is_clamped() {
        let s = analyze(&"great ".repeat(50));
        assert_eq!(s.score, 1.0);
        let s = analyze(&"awful ".repeat(50));
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let text = "Cross-AI consensus reached. Implementing recommended solution.";
        assert_eq!(analyze(text), analyze(text));
    }
}
