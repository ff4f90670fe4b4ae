use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Coarse emotion state shown by the UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Emotion {
    Joy,
    Trust,
    Neutral,
    Fear,
    Anger,
}

impl Emotion {
    /// Maps a sentiment score to an emotion.
    ///
    /// Thresholds are checked in order: `>= 0.7` Joy, `>= 0.55` Trust,
    /// `<= 0.3` Anger, `<= 0.45` Fear, otherwise Neutral.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Emotion::Joy
        } else if score >= 0.55 {
            Emotion::Trust
        } else if score <= 0.3 {
            Emotion::Anger
        } else if score <= 0.45 {
            Emotion::Fear
        } else {
            Emotion::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Emotion::from_score(1.0), Emotion::Joy);
        assert_eq!(Emotion::from_score(0.7), Emotion::Joy);
        assert_eq!(Emotion::from_score(0.69), Emotion::Trust);
        assert_eq!(Emotion::from_score(0.55), Emotion::Trust);
        assert_eq!(Emotion::from_score(0.5), Emotion::Neutral);
        assert_eq!(Emotion::from_score(0.45), Emotion::Fear);
        assert_eq!(Emotion::from_score(0.31), Emotion::Fear);
        assert_eq!(Emotion::from_score(0.3), Emotion::Anger);
        assert_eq!(Emotion::from_score(0.0), Emotion::Anger);
    }

    #[test]
    fn test_label() {
        assert_eq!(Emotion::Trust.to_string(), "Trust");
        assert_eq!(Emotion::Anger.as_ref(), "Anger");
    }
}
