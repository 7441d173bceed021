use crate::config::FillerLexicon;
use crate::metrics::MetricsError;
use regex_lite::Regex;
use std::collections::BTreeMap;

/// Filler vocabulary compiled to word-boundary regexes.
///
/// Matching runs over the raw text rather than the token stream so that
/// multi-word fillers ("you know") are found across token boundaries.
pub(super) struct CompiledFillers {
    terms: Vec<(String, Regex)>,
}

impl CompiledFillers {
    pub(super) fn compile(lexicon: &FillerLexicon) -> Result<Self, MetricsError> {
        let mut terms = Vec::with_capacity(lexicon.terms.len());
        for term in &lexicon.terms {
            let normalized = term.to_lowercase();
            let escaped: Vec<String> = normalized
                .split_whitespace()
                .map(|w| regex_lite::escape(w))
                .collect();
            let pattern = format!(r"(?i)\b{}\b", escaped.join(r"\s+"));
            let regex = Regex::new(&pattern).map_err(|source| MetricsError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            terms.push((normalized, regex));
        }
        Ok(Self { terms })
    }

    /// Per-term occurrence counts (only terms that occur) and the total.
    pub(super) fn count(&self, raw_text: &str) -> (BTreeMap<String, usize>, usize) {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for (term, regex) in &self.terms {
            let n = regex.find_iter(raw_text).count();
            if n > 0 {
                counts.insert(term.clone(), n);
                total += n;
            }
        }
        (counts, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled() -> CompiledFillers {
        CompiledFillers::compile(&FillerLexicon::default()).expect("default lexicon compiles")
    }

    #[test]
    fn counts_repeated_single_word_fillers() {
        let (counts, total) = compiled().count("Um, so I was, um, thinking, uh, yes");
        assert_eq!(counts.get("um"), Some(&2));
        assert_eq!(counts.get("uh"), Some(&1));
        assert_eq!(total, 3);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (lower, _) = compiled().count("um, I think");
        let (upper, _) = compiled().count("UM, I think");
        assert_eq!(lower.get("um"), upper.get("um"));
    }

    #[test]
    fn multi_word_phrases_span_token_boundaries() {
        let (counts, total) = compiled().count("It was, you know, fine. You  know?");
        assert_eq!(counts.get("you know"), Some(&2));
        assert_eq!(total, 2);
    }

    #[test]
    fn so_basically_counts_once_as_basically() {
        let (counts, total) = compiled().count("So basically it was basically fine");
        assert_eq!(counts.get("basically"), Some(&2));
        assert!(!counts.contains_key("so basically"));
        assert_eq!(total, 2);
    }

    #[test]
    fn word_boundaries_prevent_substring_hits() {
        // "umbrella" must not count as "um", "error" not as "er".
        let (counts, total) = compiled().count("the umbrella caused an error");
        assert!(counts.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn empty_text_has_no_fillers() {
        let (counts, total) = compiled().count("");
        assert!(counts.is_empty());
        assert_eq!(total, 0);
    }
}
