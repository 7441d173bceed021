//! Threshold bucketing of numeric metrics into display strings.
//!
//! Bands are exhaustive and non-overlapping; boundary ownership is defined
//! on the config band types. The strings are product copy, kept short enough
//! for a feedback card.

use crate::config::AnalysisConfig;
use crate::sentiment::SentimentLabel;

const GRAMMAR_STRONG_AT: f64 = 90.0;
const GRAMMAR_FAIR_AT: f64 = 70.0;

/// Numeric inputs the bucketing reads; a narrowed view of SpeechMetrics.
pub(super) struct NumericSummary {
    pub word_count: usize,
    pub wpm: f64,
    pub filler_percentage: f64,
    pub grammar_score: f64,
    pub vocabulary_diversity: f64,
    pub sentiment_label: SentimentLabel,
    pub sentiment_polarity: f64,
}

pub(super) struct Qualitative {
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

pub(super) fn assess(cfg: &AnalysisConfig, m: &NumericSummary) -> Qualitative {
    if m.word_count == 0 {
        return empty_speech();
    }

    let pace_ok = m.wpm >= cfg.pace.slow_below && m.wpm <= cfg.pace.fast_above;
    let fillers_low = m.filler_percentage < cfg.filler_rate.low_below;
    let fillers_heavy = m.filler_percentage > cfg.filler_rate.high_above;
    let grammar_strong = m.grammar_score >= GRAMMAR_STRONG_AT;
    let vocab_rich = m.vocabulary_diversity >= cfg.diversity.rich_at;

    let pace_assessment = if m.wpm < cfg.pace.slow_below {
        format!(
            "Your pace of {} words per minute is on the slow side; listeners may drift.",
            m.wpm as i64
        )
    } else if m.wpm > cfg.pace.fast_above {
        format!(
            "Your pace of {} words per minute is fast; key points risk getting lost.",
            m.wpm as i64
        )
    } else {
        format!(
            "Your pace of {} words per minute sits in a comfortable conversational range.",
            m.wpm as i64
        )
    };

    let filler_assessment = if fillers_low {
        "Filler words are minimal and do not distract.".to_owned()
    } else if fillers_heavy {
        format!(
            "Filler words make up {:.1}% of your speech, which noticeably weakens delivery.",
            m.filler_percentage
        )
    } else {
        format!(
            "Filler words make up {:.1}% of your speech; trimming them would sharpen delivery.",
            m.filler_percentage
        )
    };

    let grammar_assessment = if grammar_strong {
        "Grammar is clean with no recurring issues.".to_owned()
    } else if m.grammar_score >= GRAMMAR_FAIR_AT {
        "A few grammatical slips appeared; review the highlighted phrases.".to_owned()
    } else {
        "Several grammar patterns need attention; see the highlighted phrases.".to_owned()
    };

    let vocabulary_assessment = if vocab_rich {
        "Your vocabulary is varied and keeps the speech engaging.".to_owned()
    } else if m.vocabulary_diversity >= cfg.diversity.adequate_at {
        "Vocabulary variety is adequate; a few synonyms would add color.".to_owned()
    } else {
        "Word choice is repetitive; varying your vocabulary would hold attention better."
            .to_owned()
    };

    let tone_assessment = match m.sentiment_label {
        SentimentLabel::Positive => "Your tone comes across as upbeat and engaged.".to_owned(),
        SentimentLabel::Neutral => "Your tone is even and neutral throughout.".to_owned(),
        SentimentLabel::Negative => {
            "Your tone leans negative; listeners may read it as low energy.".to_owned()
        }
    };

    let strong_areas = [pace_ok, fillers_low, grammar_strong, vocab_rich]
        .iter()
        .filter(|ok| **ok)
        .count();
    let general_impression = match strong_areas {
        4 => "Polished delivery across the board; keep practicing to maintain it.".to_owned(),
        2 | 3 => "A solid foundation with a couple of clear areas to tighten up.".to_owned(),
        _ => "Delivery needs work in several areas; focus on one metric at a time.".to_owned(),
    };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    let mut actionable_tips = Vec::new();

    if pace_ok {
        strengths.push("Comfortable, listener-friendly speaking pace.".to_owned());
    } else {
        improvements.push(format!(
            "Bring your pace into the {:.0}-{:.0} WPM range.",
            cfg.pace.slow_below, cfg.pace.fast_above
        ));
        if m.wpm < cfg.pace.slow_below {
            actionable_tips.push(
                "Rehearse with a timer and aim to cover slightly more material per minute."
                    .to_owned(),
            );
        } else {
            actionable_tips.push(
                "Mark deliberate pause points in your notes and breathe at each one.".to_owned(),
            );
        }
    }

    if fillers_low {
        strengths.push("Very few filler words.".to_owned());
    } else {
        improvements.push("Reduce filler words such as \"um\" and \"you know\".".to_owned());
        actionable_tips.push(
            "Replace each filler with a silent pause; silence reads as composure.".to_owned(),
        );
    }

    if grammar_strong {
        strengths.push("Clean grammar throughout.".to_owned());
    } else {
        improvements.push("Tighten up the flagged grammar patterns.".to_owned());
        actionable_tips
            .push("Read the flagged phrases aloud with the corrected form.".to_owned());
    }

    if vocab_rich {
        strengths.push("Varied vocabulary.".to_owned());
    } else {
        improvements.push("Broaden word choice to avoid repetition.".to_owned());
        actionable_tips.push(
            "Pick three words you overuse and choose a replacement for each before the next run."
                .to_owned(),
        );
    }

    if m.sentiment_polarity > 0.1 {
        strengths.push("Positive, engaged tone.".to_owned());
    } else if m.sentiment_polarity < -0.1 {
        improvements.push("Lift the overall tone; it currently reads as negative.".to_owned());
        actionable_tips.push(
            "Reframe problem statements around what you did or learned, not what went wrong."
                .to_owned(),
        );
    }

    Qualitative {
        pace_assessment,
        filler_assessment,
        grammar_assessment,
        vocabulary_assessment,
        tone_assessment,
        general_impression,
        strengths,
        improvements,
        actionable_tips,
    }
}

fn empty_speech() -> Qualitative {
    Qualitative {
        pace_assessment: "No speech detected, so pace could not be measured.".to_owned(),
        filler_assessment: "No speech detected.".to_owned(),
        grammar_assessment: "No speech detected.".to_owned(),
        vocabulary_assessment: "No speech detected.".to_owned(),
        tone_assessment: "No speech detected.".to_owned(),
        general_impression:
            "No speech detected; try recording again closer to the microphone.".to_owned(),
        strengths: Vec::new(),
        improvements: Vec::new(),
        actionable_tips: vec![
            "Check that your microphone is working and record at least a few sentences."
                .to_owned(),
        ],
    }
}
