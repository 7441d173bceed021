use crate::sentiment::{SentimentAnalyzer, SentimentScore};
use crate::text;

// Valences are hand-tuned for interview/presentation speech; the exact
// values matter less than their sign and rough magnitude.
const VALENCES: &[(&str, f64)] = &[
    ("amazing", 0.9),
    ("excellent", 0.9),
    ("fantastic", 0.9),
    ("love", 0.9),
    ("wonderful", 0.9),
    ("best", 0.8),
    ("excited", 0.8),
    ("great", 0.8),
    ("happy", 0.8),
    ("confident", 0.7),
    ("enjoy", 0.7),
    ("glad", 0.7),
    ("good", 0.7),
    ("success", 0.7),
    ("proud", 0.7),
    ("strong", 0.6),
    ("interesting", 0.5),
    ("well", 0.4),
    ("hate", -0.9),
    ("terrible", -0.9),
    ("worst", -0.9),
    ("awful", -0.9),
    ("angry", -0.8),
    ("failure", -0.8),
    ("bad", -0.7),
    ("fail", -0.7),
    ("sad", -0.7),
    ("nervous", -0.6),
    ("worried", -0.6),
    ("wrong", -0.6),
    ("poor", -0.6),
    ("difficult", -0.5),
    ("problem", -0.5),
    ("hard", -0.4),
];

const NEGATORS: &[&str] = &["not", "no", "never", "hardly", "barely"];

/// Deterministic word-valence sentiment analyzer.
///
/// Polarity is the mean valence of sentiment-bearing words, with the sign
/// flipped when the preceding word negates ("not good"). Subjectivity is the
/// share of words that carry any valence. Both are clamped to their ranges.
#[derive(Clone, Debug, Default)]
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

fn valence_of(word: &str) -> Option<f64> {
    VALENCES
        .iter()
        .find(|(term, _)| *term == word)
        .map(|(_, v)| *v)
}

fn negates(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> SentimentScore {
        let words = text::words(text);
        if words.is_empty() {
            return SentimentScore::neutral();
        }

        let mut sum = 0.0;
        let mut bearing = 0usize;
        for (i, word) in words.iter().enumerate() {
            if let Some(mut valence) = valence_of(word) {
                if i > 0 && negates(&words[i - 1]) {
                    valence = -valence;
                }
                sum += valence;
                bearing += 1;
            }
        }

        if bearing == 0 {
            return SentimentScore::neutral();
        }

        SentimentScore {
            polarity: (sum / bearing as f64).clamp(-1.0, 1.0),
            subjectivity: (bearing as f64 / words.len() as f64).clamp(0.0, 1.0),
        }
    }
}
