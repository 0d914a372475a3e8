use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{QuizVersion, RawScores};
use super::report::QuizReport;
use super::session::SessionSnapshot;

/// Stored outcome of a completed quiz, one per version.
///
/// Records written before reports were kept carry raw scores only; the report is rebuilt
/// from them when loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    pub version: QuizVersion,
    pub raw_scores: RawScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<QuizReport>,
    #[serde(alias = "timestamp")]
    pub saved_at: DateTime<Utc>,
}

impl SavedResult {
    pub fn from_report(report: QuizReport) -> Self {
        Self {
            version: report.version,
            raw_scores: report.raw_scores,
            report: Some(report),
            saved_at: Utc::now(),
        }
    }
}

/// Storage abstraction for results and in-flight progress so the service can be
/// exercised without touching disk.
pub trait QuizStore: Send + Sync {
    fn save_result(&self, result: SavedResult) -> Result<(), StoreError>;
    fn load_result(&self, version: QuizVersion) -> Result<Option<SavedResult>, StoreError>;
    fn save_progress(&self, snapshot: SessionSnapshot) -> Result<(), StoreError>;
    fn load_progress(&self) -> Result<Option<SessionSnapshot>, StoreError>;
    fn clear_progress(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored record could not be (de)serialized: {0}")]
    Serialization(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
