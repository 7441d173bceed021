//! Per-request orchestration: transcript -> metrics -> score -> report.
//!
//! Each `run` is independent; the pipeline holds no state between requests,
//! so any number of analyses can run concurrently on separate tasks.

use crate::metrics::MetricsExtractor;
use crate::report::{AnalysisReport, ReportStore, StoreError};
use crate::score::{skill_level, ConfidenceScorer, ScoreInputs};
use crate::sentiment::SentimentAnalyzer;
use crate::transcript::{TranscriptError, TranscriptSource};

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("transcript source failed: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("report store failed: {0}")]
    Store(#[from] StoreError),
}

pub struct AnalysisPipeline<Src, A, St> {
    pub source: Src,
    pub extractor: MetricsExtractor<A>,
    pub scorer: ConfidenceScorer,
    pub store: St,
}

impl<Src, A, St> AnalysisPipeline<Src, A, St>
where
    Src: TranscriptSource,
    A: SentimentAnalyzer,
    St: ReportStore,
{
    pub async fn run(&self) -> Result<AnalysisReport, PipelineError> {
        let transcript = self.source.fetch().await?;
        tracing::info!(
            duration_seconds = transcript.duration_seconds(),
            chars = transcript.text().len(),
            "transcript received"
        );

        let metrics = self.extractor.extract(&transcript);
        let confidence = self.scorer.score(ScoreInputs::from_metrics(&metrics));
        let report = AnalysisReport {
            transcript,
            metrics,
            confidence,
            skill_level: skill_level(confidence),
        };

        self.store.save(report.clone()).await?;
        tracing::info!(
            confidence,
            skill_level = ?report.skill_level,
            "analysis stored"
        );

        Ok(report)
    }
}
