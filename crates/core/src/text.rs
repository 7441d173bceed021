//! Shared tokenization rule for word-level metrics.
//!
//! Every metric that counts words (rate, diversity, filler percentage,
//! sentiment) goes through the same rule so the counts stay consistent:
//! split on whitespace, strip leading/trailing non-alphanumeric characters,
//! lowercase, and drop tokens that were punctuation only. Interior
//! punctuation is kept, so contractions like "i'm" survive as one word.
//! Filler words are NOT removed here; they count as words.

/// Tokenize `text` into lowercase words.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}
