mod lexicon;

use serde::{Deserialize, Serialize};

pub use lexicon::LexiconSentimentAnalyzer;

/// Polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Fixed threshold mapping; ±0.1 belongs to Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            Self::Positive
        } else if polarity < -0.1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Polarity analysis collaborator. Implementations must be pure over the
/// input text so repeated analysis of the same transcript is reproducible.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentScore;
}
