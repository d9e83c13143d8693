use crate::{ExportRecord, ModelOutput, TrainingExample, TriageResult};
use async_trait::async_trait;
use std::path::PathBuf;

/// The external classifier/training collaborator.
#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    /// Run the model over normalized report text. Output vectors are
    /// aligned with the tactic/technique catalogs.
    async fn predict(&self, text: &str) -> TriageResult<ModelOutput>;

    /// Ask the collaborator to rebuild the model from the current corpus.
    /// Resource-heavy; callers must not retry automatically.
    async fn retrain(&self, incremental: bool) -> TriageResult<()>;

    /// Fetch the per-universe min/max calibration bounds learned by the
    /// most recent training run.
    async fn fetch_calibration(&self) -> TriageResult<CalibrationParams>;
}

/// Append-only sink for curator-confirmed training examples.
#[async_trait]
pub trait CorpusSink: Send + Sync {
    async fn append(&self, example: &TrainingExample) -> TriageResult<()>;
}

/// Write-once sink for STIX export records. Returns the path of the
/// written artifact for download.
#[async_trait]
pub trait ExportSink: Send + Sync {
    async fn export(&self, record: &ExportRecord) -> TriageResult<PathBuf>;
}

/// Wire shape of the calibration parameters artifact: one (min, max)
/// pair per label universe.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct CalibrationParams {
    pub tactics: (f64, f64),
    pub techniques: (f64, f64),
}
