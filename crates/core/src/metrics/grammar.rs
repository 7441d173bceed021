use crate::config::GrammarRules;
use crate::metrics::MetricsError;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// One heuristic match in the original text. `position` is the byte offset
/// of the match so callers can highlight the span later.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrammarFinding {
    pub rule: String,
    pub matched: String,
    pub position: usize,
}

pub(super) struct CompiledGrammar {
    rules: Vec<CompiledRule>,
}

struct CompiledRule {
    name: String,
    penalty: f64,
    regex: Regex,
}

impl CompiledGrammar {
    pub(super) fn compile(rules: &GrammarRules) -> Result<Self, MetricsError> {
        let mut compiled = Vec::with_capacity(rules.rules.len());
        for rule in &rules.rules {
            let regex = Regex::new(&rule.pattern).map_err(|source| MetricsError::Pattern {
                pattern: rule.pattern.clone(),
                source,
            })?;
            compiled.push(CompiledRule {
                name: rule.name.clone(),
                penalty: rule.penalty,
                regex,
            });
        }
        Ok(Self { rules: compiled })
    }

    /// Evaluate every rule against `raw_text`. Returns all findings sorted by
    /// position and the score: 100 minus each matched rule's penalty, charged
    /// once per rule category (repeating the same mistake is not compounded),
    /// floored at 0.
    pub(super) fn evaluate(&self, raw_text: &str) -> (Vec<GrammarFinding>, f64) {
        let mut findings = Vec::new();
        let mut score = 100.0;
        for rule in &self.rules {
            let mut matched_any = false;
            for m in rule.regex.find_iter(raw_text) {
                matched_any = true;
                findings.push(GrammarFinding {
                    rule: rule.name.clone(),
                    matched: m.as_str().to_owned(),
                    position: m.start(),
                });
            }
            if matched_any {
                score -= rule.penalty;
            }
        }
        findings.sort_by_key(|f| f.position);
        (findings, score.max(0.0))
    }
}
