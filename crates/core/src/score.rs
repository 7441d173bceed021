//! Confidence scoring: reduce the metric set to one 0-100 number.
//!
//! Additive weighted adjustments from a base of 100. Intermediate values may
//! go far below zero; clamping happens exactly once, at the end, so a heavy
//! filler penalty can absorb what a positive sentiment bonus would have
//! added back.

use crate::config::ScoreWeights;
use crate::metrics::SpeechMetrics;
use serde::{Deserialize, Serialize};

/// The slice of `SpeechMetrics` the confidence formula reads.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreInputs {
    pub wpm: f64,
    pub filler_total: usize,
    pub sentiment_polarity: f64,
}

impl ScoreInputs {
    pub fn from_metrics(metrics: &SpeechMetrics) -> Self {
        Self {
            wpm: metrics.wpm,
            filler_total: metrics.filler_total,
            sentiment_polarity: metrics.sentiment_polarity,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Map a confidence score to a coarse skill level. Boundaries are inclusive
/// upward: 85 is Advanced, 65 is Intermediate.
pub fn skill_level(confidence: u8) -> SkillLevel {
    if confidence >= 85 {
        SkillLevel::Advanced
    } else if confidence >= 65 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Pure, stateless scorer over `ScoreInputs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfidenceScorer {
    weights: ScoreWeights,
}

impl ConfidenceScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Compute the confidence score.
    ///
    /// Pace deviations outside the ideal band cost `pace_slope` per WPM in
    /// either direction. Every filler costs `filler_cost`, uncapped; fillers
    /// are the strongest signal in the formula. Negative polarity costs
    /// twice per unit what positive polarity earns. The result is clamped
    /// to [0, 100] and rounded only after all adjustments.
    pub fn score(&self, inputs: ScoreInputs) -> u8 {
        let w = &self.weights;
        let mut score = 100.0;

        if inputs.wpm < w.ideal_wpm_low {
            score -= (w.ideal_wpm_low - inputs.wpm) * w.pace_slope;
        } else if inputs.wpm > w.ideal_wpm_high {
            score -= (inputs.wpm - w.ideal_wpm_high) * w.pace_slope;
        }

        score -= inputs.filler_total as f64 * w.filler_cost;

        if inputs.sentiment_polarity < 0.0 {
            score -= inputs.sentiment_polarity.abs() * w.negative_sentiment_cost;
        } else if inputs.sentiment_polarity > 0.0 {
            score += inputs.sentiment_polarity * w.positive_sentiment_bonus;
        }

        score.clamp(0.0, 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ConfidenceScorer {
        ConfidenceScorer::default()
    }

    fn inputs(wpm: f64, filler_total: usize, sentiment_polarity: f64) -> ScoreInputs {
        ScoreInputs {
            wpm,
            filler_total,
            sentiment_polarity,
        }
    }

    #[test]
    fn ideal_delivery_scores_full_marks() {
        assert_eq!(scorer().score(inputs(145.0, 0, 0.0)), 100);
    }

    #[test]
    fn in_band_pace_with_fillers_and_positive_tone() {
        // 100 - 0 (pace in band) - 4 (fillers) + 3 (sentiment) = 99
        assert_eq!(scorer().score(inputs(145.0, 2, 0.3)), 99);
    }

    #[test]
    fn fast_negative_heavy_filler_delivery() {
        // 100 - (200-160)*0.5 - 10*2 - 0.8*20 = 44
        assert_eq!(scorer().score(inputs(200.0, 10, -0.8)), 44);
    }

    #[test]
    fn pace_band_boundaries_cost_nothing() {
        assert_eq!(scorer().score(inputs(130.0, 0, 0.0)), 100);
        assert_eq!(scorer().score(inputs(160.0, 0, 0.0)), 100);
        // One WPM outside either edge costs half a point, rounding up/down.
        assert_eq!(scorer().score(inputs(129.0, 0, 0.0)), 100);
        assert_eq!(scorer().score(inputs(128.0, 0, 0.0)), 99);
        assert_eq!(scorer().score(inputs(162.0, 0, 0.0)), 99);
    }

    #[test]
    fn sentiment_adjustment_is_asymmetric() {
        // Base 90 from a 110-WPM pace penalty keeps the positive case away
        // from the 100 clamp so the exact adjustment is visible.
        let base = scorer().score(inputs(110.0, 0, 0.0));
        assert_eq!(base, 90);
        assert_eq!(scorer().score(inputs(110.0, 0, 0.5)), 95);
        assert_eq!(scorer().score(inputs(110.0, 0, -0.5)), 80);
    }

    #[test]
    fn monotone_non_increasing_in_fillers() {
        let s = scorer();
        let mut prev = s.score(inputs(145.0, 0, 0.0));
        for filler_total in 1..=60 {
            let next = s.score(inputs(145.0, filler_total, 0.0));
            assert!(next <= prev, "filler_total={filler_total}");
            prev = next;
        }
    }

    #[test]
    fn output_stays_in_range_for_extreme_inputs() {
        let s = scorer();
        let extremes = [
            inputs(0.0, 0, 0.0),
            inputs(1000.0, 0, 0.0),
            inputs(145.0, 1000, 0.0),
            inputs(145.0, 0, -1.0),
            inputs(145.0, 0, 1.0),
            inputs(0.0, 1000, -1.0),
        ];
        for e in extremes {
            let score = s.score(e);
            assert!(score <= 100, "{e:?}");
        }
        // Deep negative intermediate values clamp to exactly zero.
        assert_eq!(s.score(inputs(145.0, 1000, 0.0)), 0);
    }

    #[test]
    fn clamp_applies_only_at_the_end() {
        // Fillers drive the raw score to -20; the positive bonus of +10
        // cannot rescue it because clamping happens after all adjustments.
        assert_eq!(scorer().score(inputs(145.0, 60, 1.0)), 0);
    }

    #[test]
    fn skill_level_boundaries() {
        assert_eq!(skill_level(100), SkillLevel::Advanced);
        assert_eq!(skill_level(85), SkillLevel::Advanced);
        assert_eq!(skill_level(84), SkillLevel::Intermediate);
        assert_eq!(skill_level(65), SkillLevel::Intermediate);
        assert_eq!(skill_level(64), SkillLevel::Beginner);
        assert_eq!(skill_level(0), SkillLevel::Beginner);
    }
}
