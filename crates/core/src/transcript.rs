//! Transcript input value object and the ASR boundary.
//!
//! Real speech-to-text lives outside this crate. The engine only sees a
//! `TranscriptInput`; `TranscriptSource` is the seam a real ASR backend
//! plugs into, with plain-text implementations for tests and the CLI.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A transcript plus the duration of the audio it came from.
///
/// Construction validates the duration: negative or non-finite values are a
/// caller bug and rejected up front. Zero duration is accepted; rate-based
/// metrics degrade to zero for it instead of failing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TranscriptInput {
    text: String,
    duration_seconds: f64,
}

impl TranscriptInput {
    pub fn new<S: Into<String>>(text: S, duration_seconds: f64) -> Result<Self, TranscriptError> {
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(TranscriptError::InvalidDuration(duration_seconds));
        }
        Ok(Self {
            text: text.into(),
            duration_seconds,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("duration must be finite and non-negative, got {0}")]
    InvalidDuration(f64),
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),
}

/// Boundary to the speech-to-text collaborator.
pub trait TranscriptSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<TranscriptInput, TranscriptError>>;
}

/// Source over an already-resolved transcript.
#[derive(Clone, Debug)]
pub struct PlainTextSource {
    input: TranscriptInput,
}

impl PlainTextSource {
    pub fn new(input: TranscriptInput) -> Self {
        Self { input }
    }
}

impl TranscriptSource for PlainTextSource {
    fn fetch(&self) -> BoxFuture<'_, Result<TranscriptInput, TranscriptError>> {
        async move { Ok(self.input.clone()) }.boxed()
    }
}

/// Source reading a UTF-8 transcript file, with the audio duration supplied
/// by the caller (duration normally comes from decoded audio metadata).
#[derive(Clone, Debug)]
pub struct TextFileSource {
    path: PathBuf,
    duration_seconds: f64,
}

impl TextFileSource {
    pub fn new<P: Into<PathBuf>>(path: P, duration_seconds: f64) -> Self {
        Self {
            path: path.into(),
            duration_seconds,
        }
    }
}

impl TranscriptSource for TextFileSource {
    fn fetch(&self) -> BoxFuture<'_, Result<TranscriptInput, TranscriptError>> {
        async move {
            let text = std::fs::read_to_string(&self.path)?;
            TranscriptInput::new(text, self.duration_seconds)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_duration() {
        let err = TranscriptInput::new("hello", -1.0).unwrap_err();
        assert!(matches!(err, TranscriptError::InvalidDuration(d) if d == -1.0));
    }

    #[test]
    fn rejects_non_finite_duration() {
        assert!(TranscriptInput::new("hello", f64::NAN).is_err());
        assert!(TranscriptInput::new("hello", f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_zero_duration_as_degenerate() {
        let input = TranscriptInput::new("hello", 0.0).expect("zero duration is valid");
        assert_eq!(input.duration_seconds(), 0.0);
    }

    #[tokio::test]
    async fn plain_text_source_returns_its_input() {
        let input = TranscriptInput::new("hello there", 4.0).expect("valid");
        let source = PlainTextSource::new(input.clone());
        let fetched = source.fetch().await.expect("fetch");
        assert_eq!(fetched, input);
    }

    #[tokio::test]
    async fn file_source_reports_missing_file() {
        let source = TextFileSource::new("/nonexistent/transcript.txt", 10.0);
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, TranscriptError::Io(_)));
    }
}
