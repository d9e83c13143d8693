//! Shared application state and the calibration snapshot lifecycle.

use confidence_calibrator::CalibrationSnapshot;
use model_client::{HttpClassifierProvider, ModelClient};
use report_store::{FileCorpus, StixExporter};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use triage_core::{ClassifierProvider, TriageResult};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ClassifierProvider>,
    pub corpus: Arc<FileCorpus>,
    pub exporter: Arc<StixExporter>,
    /// Process-wide calibration state. `None` until the first prediction
    /// loads it; replaced wholesale (a fresh `Arc`) when a retrain
    /// completes, so in-flight requests keep the snapshot they started
    /// with and never see mixed bounds.
    calibration: Arc<RwLock<Option<Arc<CalibrationSnapshot>>>>,
    /// Guards against overlapping retrain cycles; retraining is
    /// resource-heavy and must not stack.
    pub retrain_running: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn ClassifierProvider>,
        corpus: Arc<FileCorpus>,
        exporter: Arc<StixExporter>,
    ) -> Self {
        Self {
            provider,
            corpus,
            exporter,
            calibration: Arc::new(RwLock::new(None)),
            retrain_running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let client = ModelClient::with_defaults()?;
        let corpus_path =
            std::env::var("CORPUS_PATH").unwrap_or_else(|_| "data/training_corpus.tsv".to_string());
        let export_dir = std::env::var("EXPORT_DIR").unwrap_or_else(|_| "data/exports".to_string());

        Ok(Self::new(
            Arc::new(HttpClassifierProvider::new(client)),
            Arc::new(FileCorpus::new(corpus_path)),
            Arc::new(StixExporter::new(export_dir)),
        ))
    }

    /// The active calibration snapshot, fetching it from the model
    /// collaborator on first use.
    pub async fn current_snapshot(&self) -> TriageResult<Arc<CalibrationSnapshot>> {
        if let Some(snapshot) = self.calibration.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        // First prediction since startup: load and publish. A concurrent
        // loser of this race just publishes an identical snapshot.
        let params = self.provider.fetch_calibration().await?;
        let snapshot = Arc::new(CalibrationSnapshot::from_params(&params)?);
        *self.calibration.write().await = Some(Arc::clone(&snapshot));
        info!("calibration snapshot loaded");
        Ok(snapshot)
    }

    /// Atomically publish a fresh snapshot (post-retrain).
    pub async fn publish_snapshot(&self, snapshot: CalibrationSnapshot) {
        *self.calibration.write().await = Some(Arc::new(snapshot));
        info!("calibration snapshot replaced");
    }
}
