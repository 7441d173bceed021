//! The metrics extraction engine.
//!
//! `MetricsExtractor` turns a transcript plus audio duration into the full
//! `SpeechMetrics` record: speaking rate, filler usage, grammar findings,
//! vocabulary diversity, sentiment, and the qualitative feedback block.
//! Extraction is a pure function of its input; the compiled tables are
//! read-only and safe to share across threads.

mod assessment;
mod fillers;
mod grammar;

use crate::config::AnalysisConfig;
use crate::sentiment::{SentimentAnalyzer, SentimentLabel};
use crate::text;
use crate::transcript::TranscriptInput;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use grammar::GrammarFinding;

/// Everything the engine measures about one transcript.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpeechMetrics {
    pub word_count: usize,
    /// Words per minute, rounded to the nearest integer. 0 for empty speech
    /// or zero duration.
    pub wpm: f64,
    /// Occurrence count per filler term that appeared (keys are lowercase).
    pub filler_words: BTreeMap<String, usize>,
    pub filler_total: usize,
    /// Fillers as a percentage of all words; 0 when there are no words.
    pub filler_percentage: f64,
    /// All heuristic matches, ordered by position in the text.
    pub grammar_findings: Vec<GrammarFinding>,
    /// 100 minus a per-category penalty for each rule that matched, floor 0.
    pub grammar_score: f64,
    pub unique_words: usize,
    /// Type-token ratio; 0 when there are no words.
    pub vocabulary_diversity: f64,
    pub sentiment_polarity: f64,
    pub sentiment_subjectivity: f64,
    pub sentiment_label: SentimentLabel,
    pub pace_assessment: String,
    pub filler_assessment: String,
    pub grammar_assessment: String,
    pub vocabulary_assessment: String,
    pub tone_assessment: String,
    pub general_impression: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub actionable_tips: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex_lite::Error,
    },
}

/// Extracts `SpeechMetrics` from transcripts.
///
/// Construction compiles the filler and grammar tables once; `extract` is
/// then infallible. Degenerate input (empty text, zero duration) yields
/// zeroed metrics rather than an error.
pub struct MetricsExtractor<A> {
    config: AnalysisConfig,
    fillers: fillers::CompiledFillers,
    grammar: grammar::CompiledGrammar,
    sentiment: A,
}

impl<A: SentimentAnalyzer> MetricsExtractor<A> {
    pub fn new(config: AnalysisConfig, sentiment: A) -> Result<Self, MetricsError> {
        let fillers = fillers::CompiledFillers::compile(&config.fillers)?;
        let grammar = grammar::CompiledGrammar::compile(&config.grammar)?;
        Ok(Self {
            config,
            fillers,
            grammar,
            sentiment,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn extract(&self, input: &TranscriptInput) -> SpeechMetrics {
        let raw_text = input.text();
        let duration_seconds = input.duration_seconds();

        let words = text::words(raw_text);
        let word_count = words.len();

        let wpm = if word_count == 0 || duration_seconds <= 0.0 {
            0.0
        } else {
            (word_count as f64 / (duration_seconds / 60.0)).round()
        };

        let (filler_words, filler_total) = self.fillers.count(raw_text);
        let filler_percentage = if word_count == 0 {
            0.0
        } else {
            filler_total as f64 / word_count as f64 * 100.0
        };

        let (grammar_findings, grammar_score) = self.grammar.evaluate(raw_text);

        let unique_words = words.iter().collect::<BTreeSet<_>>().len();
        let vocabulary_diversity = if word_count == 0 {
            0.0
        } else {
            unique_words as f64 / word_count as f64
        };

        let sentiment = self.sentiment.analyze(raw_text);
        let sentiment_label = SentimentLabel::from_polarity(sentiment.polarity);

        let qualitative = assessment::assess(
            &self.config,
            &assessment::NumericSummary {
                word_count,
                wpm,
                filler_percentage,
                grammar_score,
                vocabulary_diversity,
                sentiment_label,
                sentiment_polarity: sentiment.polarity,
            },
        );

        tracing::debug!(
            word_count,
            wpm,
            filler_total,
            grammar_score,
            polarity = sentiment.polarity,
            "metrics extracted"
        );

        SpeechMetrics {
            word_count,
            wpm,
            filler_words,
            filler_total,
            filler_percentage,
            grammar_findings,
            grammar_score,
            unique_words,
            vocabulary_diversity,
            sentiment_polarity: sentiment.polarity,
            sentiment_subjectivity: sentiment.subjectivity,
            sentiment_label,
            pace_assessment: qualitative.pace_assessment,
            filler_assessment: qualitative.filler_assessment,
            grammar_assessment: qualitative.grammar_assessment,
            vocabulary_assessment: qualitative.vocabulary_assessment,
            tone_assessment: qualitative.tone_assessment,
            general_impression: qualitative.general_impression,
            strengths: qualitative.strengths,
            improvements: qualitative.improvements,
            actionable_tips: qualitative.actionable_tips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconSentimentAnalyzer;

    fn extractor() -> MetricsExtractor<LexiconSentimentAnalyzer> {
        MetricsExtractor::new(AnalysisConfig::default(), LexiconSentimentAnalyzer::new())
            .expect("default config compiles")
    }

    fn input(text: &str, duration: f64) -> TranscriptInput {
        TranscriptInput::new(text, duration).expect("valid input")
    }

    #[test]
    fn interview_snippet_end_to_end() {
        let m = extractor().extract(&input("Um, hello everyone, um, I am, uh, here today", 10.0));
        assert_eq!(m.word_count, 9);
        assert_eq!(m.filler_total, 3);
        assert_eq!(m.filler_words.get("um"), Some(&2));
        assert_eq!(m.filler_words.get("uh"), Some(&1));
        assert_eq!(m.wpm, 54.0);
        assert_eq!(m.unique_words, 8);
        assert!((m.vocabulary_diversity - 8.0 / 9.0).abs() < 1e-12);
        assert!((m.filler_percentage - 3.0 / 9.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn wpm_matches_formula_exactly() {
        let cases = [("one two three four five", 20.0), ("a b c d e f g", 3.5)];
        for (text, duration) in cases {
            let m = extractor().extract(&input(text, duration));
            let expected = (m.word_count as f64 / (duration / 60.0)).round();
            assert_eq!(m.wpm, expected, "text={text:?}");
        }
    }

    #[test]
    fn empty_transcript_yields_zeroed_metrics() {
        let m = extractor().extract(&input("", 12.0));
        assert_eq!(m.word_count, 0);
        assert_eq!(m.wpm, 0.0);
        assert_eq!(m.filler_total, 0);
        assert_eq!(m.filler_percentage, 0.0);
        assert_eq!(m.vocabulary_diversity, 0.0);
        assert_eq!(m.unique_words, 0);
        assert_eq!(m.sentiment_label, SentimentLabel::Neutral);
        assert!(m.general_impression.contains("No speech detected"));
    }

    #[test]
    fn zero_duration_degrades_rate_to_zero() {
        let m = extractor().extract(&input("a perfectly normal sentence", 0.0));
        assert_eq!(m.word_count, 4);
        assert_eq!(m.wpm, 0.0);
        // Count-based metrics are unaffected by the degenerate duration.
        assert!(m.vocabulary_diversity > 0.0);
    }

    #[test]
    fn punctuation_only_transcript_counts_as_no_speech() {
        let m = extractor().extract(&input("... !!! ---", 5.0));
        assert_eq!(m.word_count, 0);
        assert_eq!(m.wpm, 0.0);
    }

    #[test]
    fn filler_counting_is_case_insensitive() {
        let ex = extractor();
        let lower = ex.extract(&input("Um, I think", 10.0));
        let upper = ex.extract(&input("UM, I think", 10.0));
        assert_eq!(lower.filler_words.get("um"), upper.filler_words.get("um"));
        assert_eq!(lower.filler_total, upper.filler_total);
    }

    #[test]
    fn fillers_are_counted_but_not_removed_from_word_count() {
        // Design assumption: disfluencies still count as spoken words for
        // rate and diversity purposes.
        let m = extractor().extract(&input("um um um", 60.0));
        assert_eq!(m.word_count, 3);
        assert_eq!(m.filler_total, 3);
        assert_eq!(m.wpm, 3.0);
        assert_eq!(m.filler_percentage, 100.0);
    }

    #[test]
    fn grammar_findings_carry_positions_into_raw_text() {
        let raw = "Well, they was ready";
        let m = extractor().extract(&input(raw, 6.0));
        assert_eq!(m.grammar_findings.len(), 1);
        let finding = &m.grammar_findings[0];
        assert_eq!(
            &raw[finding.position..finding.position + finding.matched.len()],
            finding.matched
        );
        assert_eq!(m.grammar_score, 85.0);
    }

    #[test]
    fn extraction_is_deterministic() {
        let ex = extractor();
        let i = input("I am, um, very happy to present this great project today", 15.0);
        let a = ex.extract(&i);
        let b = ex.extract(&i);
        assert_eq!(a, b);
        let ja = serde_json::to_string(&a).expect("serialize");
        let jb = serde_json::to_string(&b).expect("serialize");
        assert_eq!(ja, jb);
    }

    #[test]
    fn positive_transcript_gets_positive_label() {
        let m = extractor().extract(&input("I am happy and excited about this great role", 8.0));
        assert_eq!(m.sentiment_label, SentimentLabel::Positive);
        assert!(m.sentiment_polarity > 0.1);
        assert!(m.tone_assessment.contains("upbeat"));
    }
}
