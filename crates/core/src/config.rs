use serde::{Deserialize, Serialize};

pub const DEFAULT_SLOW_WPM: f64 = 110.0;
pub const DEFAULT_FAST_WPM: f64 = 160.0;
pub const DEFAULT_IDEAL_WPM_LOW: f64 = 130.0;
pub const DEFAULT_IDEAL_WPM_HIGH: f64 = 160.0;

/// Immutable analysis configuration.
///
/// Every tuned table the engine consults (filler vocabulary, grammar rules,
/// threshold bands, scoring weights) lives here and is injected at
/// construction. The numeric defaults reproduce the original product tuning
/// and are a design parameter, not something to optimize locally.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    pub pace: PaceBands,
    pub filler_rate: FillerRateBands,
    pub diversity: DiversityBands,
    pub fillers: FillerLexicon,
    pub grammar: GrammarRules,
    pub scoring: ScoreWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pace: PaceBands::default(),
            filler_rate: FillerRateBands::default(),
            diversity: DiversityBands::default(),
            fillers: FillerLexicon::default(),
            grammar: GrammarRules::default(),
            scoring: ScoreWeights::default(),
        }
    }
}

/// Pace assessment bands. Boundary ownership: `wpm < slow_below` is slow,
/// `slow_below..=fast_above` is the comfortable band, `wpm > fast_above`
/// is fast.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaceBands {
    pub slow_below: f64,
    pub fast_above: f64,
}

impl PaceBands {
    pub fn new(slow_below: f64, fast_above: f64) -> Result<Self, ConfigError> {
        if !(slow_below.is_finite() && fast_above.is_finite()) || slow_below > fast_above {
            return Err(ConfigError::InvalidPaceBands {
                slow_below,
                fast_above,
            });
        }
        Ok(Self {
            slow_below,
            fast_above,
        })
    }
}

impl Default for PaceBands {
    fn default() -> Self {
        Self {
            slow_below: DEFAULT_SLOW_WPM,
            fast_above: DEFAULT_FAST_WPM,
        }
    }
}

/// Filler-rate bands over `filler_percentage`. `pct < low_below` is minimal,
/// `low_below..=high_above` is noticeable, above that is heavy.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FillerRateBands {
    pub low_below: f64,
    pub high_above: f64,
}

impl FillerRateBands {
    pub fn new(low_below: f64, high_above: f64) -> Result<Self, ConfigError> {
        if !(low_below.is_finite() && high_above.is_finite()) || low_below > high_above {
            return Err(ConfigError::InvalidRateBands {
                low_below,
                high_above,
            });
        }
        Ok(Self {
            low_below,
            high_above,
        })
    }
}

impl Default for FillerRateBands {
    fn default() -> Self {
        Self {
            low_below: 3.0,
            high_above: 8.0,
        }
    }
}

/// Type-token-ratio bands. `diversity >= rich_at` is varied,
/// `adequate_at..rich_at` is adequate, below that is repetitive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DiversityBands {
    pub rich_at: f64,
    pub adequate_at: f64,
}

impl DiversityBands {
    pub fn new(rich_at: f64, adequate_at: f64) -> Result<Self, ConfigError> {
        if !(rich_at.is_finite() && adequate_at.is_finite()) || adequate_at > rich_at {
            return Err(ConfigError::InvalidDiversityBands {
                rich_at,
                adequate_at,
            });
        }
        Ok(Self {
            rich_at,
            adequate_at,
        })
    }
}

impl Default for DiversityBands {
    fn default() -> Self {
        Self {
            rich_at: 0.6,
            adequate_at: 0.4,
        }
    }
}

/// Filler vocabulary. Terms may be multi-word phrases ("you know"); matching
/// is case-insensitive with word boundaries over the raw text, so phrases
/// spanning token boundaries are still found.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FillerLexicon {
    pub terms: Vec<String>,
}

impl FillerLexicon {
    pub fn new(terms: Vec<String>) -> Result<Self, ConfigError> {
        if terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::EmptyFillerTerm);
        }
        Ok(Self { terms })
    }
}

impl Default for FillerLexicon {
    fn default() -> Self {
        // Bare "basically" subsumes the "so basically" phrase; listing both
        // would double-count the same span under the per-term scan.
        let terms = [
            "um", "umm", "uh", "uhh", "er", "ah", "hmm", "like", "actually",
            "basically", "you know", "i mean", "sort of", "kind of",
        ];
        Self {
            terms: terms.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// One heuristic grammar rule. The penalty is charged once per rule that
/// matches anywhere in the text, not once per match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GrammarRule {
    pub name: String,
    pub pattern: String,
    pub penalty: f64,
}

impl GrammarRule {
    pub fn new(name: &str, pattern: &str, penalty: f64) -> Result<Self, ConfigError> {
        if pattern.trim().is_empty() {
            return Err(ConfigError::EmptyGrammarPattern {
                rule: name.to_owned(),
            });
        }
        if !penalty.is_finite() || penalty < 0.0 {
            return Err(ConfigError::NegativeWeight { value: penalty });
        }
        Ok(Self {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
            penalty,
        })
    }
}

/// Ordered list of grammar rules, evaluated in declaration order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GrammarRules {
    pub rules: Vec<GrammarRule>,
}

impl Default for GrammarRules {
    fn default() -> Self {
        // Heuristic patterns over informal spoken English. These are
        // intentionally narrow; a missed error is better than a false flag
        // in user-facing feedback.
        let rules = vec![
            GrammarRule {
                name: "subject-verb-agreement".to_owned(),
                pattern: r"(?i)\b(?:(?:he|she|it)\s+(?:don't|weren't)|(?:you|we|they)\s+(?:was|is|has|does|doesn't)|i\s+(?:is|has|does))\b".to_owned(),
                penalty: 15.0,
            },
            GrammarRule {
                name: "double-negative".to_owned(),
                pattern: r"(?i)\b(?:don't|didn't|can't|won't|couldn't|doesn't|ain't|never)\s+(?:\w+\s+)?(?:no|nothing|nobody|nowhere|none)\b".to_owned(),
                penalty: 10.0,
            },
            GrammarRule {
                name: "should-of-confusion".to_owned(),
                pattern: r"(?i)\b(?:should|could|would|must|might)\s+of\b".to_owned(),
                penalty: 10.0,
            },
            GrammarRule {
                name: "double-comparative".to_owned(),
                pattern: r"(?i)\bmore\s+(?:better|worse|faster|slower|easier|harder|stronger)\b".to_owned(),
                penalty: 5.0,
            },
            GrammarRule {
                name: "article-misuse".to_owned(),
                // Keyed on vowel SOUNDS, not vowel letters: a plain
                // `a [aeiou]...` scan flags correct phrases like "a user" or
                // "a European" and misses "a hour", so the rule matches an
                // explicit list of common vowel-sound words instead.
                pattern: r"(?i)\ba\s+(?:amazing|answer|apple|approach|awful|early|easy|effort|elephant|email|error|example|excellent|extra|honest|hour|idea|interview|issue|item|opportunity|orange|umbrella|update)s?\b".to_owned(),
                penalty: 5.0,
            },
        ];
        Self { rules }
    }
}

/// Confidence-formula constants. The sentiment terms are deliberately
/// asymmetric (negative polarity costs twice what positive polarity earns);
/// that bias is part of the original tuning and must be preserved.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    pub ideal_wpm_low: f64,
    pub ideal_wpm_high: f64,
    pub pace_slope: f64,
    pub filler_cost: f64,
    pub negative_sentiment_cost: f64,
    pub positive_sentiment_bonus: f64,
}

impl ScoreWeights {
    pub fn new(
        ideal_wpm_low: f64,
        ideal_wpm_high: f64,
        pace_slope: f64,
        filler_cost: f64,
        negative_sentiment_cost: f64,
        positive_sentiment_bonus: f64,
    ) -> Result<Self, ConfigError> {
        if ideal_wpm_low > ideal_wpm_high {
            return Err(ConfigError::InvalidPaceBands {
                slow_below: ideal_wpm_low,
                fast_above: ideal_wpm_high,
            });
        }
        for value in [
            pace_slope,
            filler_cost,
            negative_sentiment_cost,
            positive_sentiment_bonus,
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { value });
            }
        }
        Ok(Self {
            ideal_wpm_low,
            ideal_wpm_high,
            pace_slope,
            filler_cost,
            negative_sentiment_cost,
            positive_sentiment_bonus,
        })
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ideal_wpm_low: DEFAULT_IDEAL_WPM_LOW,
            ideal_wpm_high: DEFAULT_IDEAL_WPM_HIGH,
            pace_slope: 0.5,
            filler_cost: 2.0,
            negative_sentiment_cost: 20.0,
            positive_sentiment_bonus: 10.0,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("pace bands must satisfy slow_below <= fast_above, got {slow_below}..{fast_above}")]
    InvalidPaceBands { slow_below: f64, fast_above: f64 },
    #[error("filler-rate bands must satisfy low_below <= high_above, got {low_below}..{high_above}")]
    InvalidRateBands { low_below: f64, high_above: f64 },
    #[error("diversity bands must satisfy adequate_at <= rich_at, got {adequate_at}..{rich_at}")]
    InvalidDiversityBands { rich_at: f64, adequate_at: f64 },
    #[error("filler terms must not be empty")]
    EmptyFillerTerm,
    #[error("grammar rule `{rule}` has an empty pattern")]
    EmptyGrammarPattern { rule: String },
    #[error("weights must be finite and non-negative, got {value}")]
    NegativeWeight { value: f64 },
}
