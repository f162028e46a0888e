//! Sentiment score classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this value are positive
pub const POSITIVE_THRESHOLD: f64 = 0.15;

/// Scores at or below this value are negative
pub const NEGATIVE_THRESHOLD: f64 = 0.0;

/// Discrete sentiment derived from a provider score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Legend order
    pub const LEGEND: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Indicator color
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
            Self::Neutral => "gray",
        }
    }

    /// Arrow glyph
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Positive => "↑",
            Self::Negative => "↓",
            Self::Neutral => "↔",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a sentiment score.
///
/// `0.15` is positive and `0.0` is negative; only the open interval
/// between them is neutral.
pub fn classify(score: f64) -> SentimentCategory {
    if score >= POSITIVE_THRESHOLD {
        SentimentCategory::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0.14), SentimentCategory::Neutral);
        assert_eq!(classify(0.15), SentimentCategory::Positive);
        assert_eq!(classify(0.00), SentimentCategory::Negative);
        assert_eq!(classify(0.001), SentimentCategory::Neutral);
        assert_eq!(classify(-1.0), SentimentCategory::Negative);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(1.0), SentimentCategory::Positive);
        assert_eq!(classify(-0.0), SentimentCategory::Negative);
        assert_eq!(classify(0.149_999), SentimentCategory::Neutral);
    }

    #[test]
    fn test_presentation() {
        assert_eq!(SentimentCategory::Positive.color(), "green");
        assert_eq!(SentimentCategory::Negative.color(), "red");
        assert_eq!(SentimentCategory::Neutral.to_string(), "Neutral");
        assert_eq!(
            SentimentCategory::LEGEND.map(SentimentCategory::label),
            ["Positive", "Negative", "Neutral"]
        );
    }
}
