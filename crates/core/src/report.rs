//! The assembled analysis report and the persistence boundary.

use crate::metrics::SpeechMetrics;
use crate::score::SkillLevel;
use crate::transcript::TranscriptInput;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// One completed analysis: input, metrics, confidence, skill level.
/// Serializes to a flat document suitable for row/document storage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub transcript: TranscriptInput,
    pub metrics: SpeechMetrics,
    pub confidence: u8,
    pub skill_level: SkillLevel,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("report store lock poisoned")]
    Poisoned,
    #[error("report store backend failed: {0}")]
    Backend(String),
}

/// Persistence collaborator. The real store (a relational database behind
/// the web service) lives outside this crate.
pub trait ReportStore: Send + Sync {
    fn save(&self, report: AnalysisReport) -> BoxFuture<'_, Result<(), StoreError>>;

    fn history(&self) -> BoxFuture<'_, Result<Vec<AnalysisReport>, StoreError>>;
}

/// In-memory store used by tests and the CLI.
#[derive(Clone, Debug, Default)]
pub struct MemoryReportStore {
    reports: Arc<Mutex<Vec<AnalysisReport>>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for MemoryReportStore {
    fn save(&self, report: AnalysisReport) -> BoxFuture<'_, Result<(), StoreError>> {
        async move {
            self.reports
                .lock()
                .map_err(|_| StoreError::Poisoned)?
                .push(report);
            Ok(())
        }
        .boxed()
    }

    fn history(&self) -> BoxFuture<'_, Result<Vec<AnalysisReport>, StoreError>> {
        async move {
            Ok(self
                .reports
                .lock()
                .map_err(|_| StoreError::Poisoned)?
                .clone())
        }
        .boxed()
    }
}
