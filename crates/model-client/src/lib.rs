//! HTTP client for the external classifier/training service.
//!
//! The model itself (feature extraction, the multi-label estimators and
//! the training loop) lives in a separate service; this crate is the
//! only place that knows its wire protocol. Everything upstream talks to
//! the [`ClassifierProvider`] trait from `triage-core` so tests can
//! inject fakes.

mod provider;

pub use provider::HttpClassifierProvider;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};
use triage_core::{CalibrationParams, ModelOutput, TriageError, TriageResult};

/// Configuration for the model service connection.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Retraining runs far longer than a prediction; it gets its own
    /// generous timeout.
    pub retrain_timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("MODEL_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8010".to_string()),
            request_timeout: Duration::from_secs(30),
            retrain_timeout: Duration::from_secs(3600),
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    tactic_predictions: Vec<bool>,
    tactic_probabilities: Vec<f64>,
    technique_predictions: Vec<bool>,
    technique_probabilities: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct RetrainRequest {
    incremental: bool,
}

#[derive(Debug, Deserialize)]
struct CalibrationResponse {
    tactics: (f64, f64),
    techniques: (f64, f64),
}

/// Low-level client for the model service endpoints.
#[derive(Clone)]
pub struct ModelClient {
    client: reqwest::Client,
    retrain_client: reqwest::Client,
    base_url: String,
}

impl ModelClient {
    pub fn new(config: ModelConfig) -> TriageResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TriageError::ModelService(format!("failed to build HTTP client: {e}")))?;
        let retrain_client = reqwest::Client::builder()
            .timeout(config.retrain_timeout)
            .build()
            .map_err(|e| TriageError::ModelService(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            retrain_client,
            base_url: config.base_url,
        })
    }

    pub fn with_defaults() -> TriageResult<Self> {
        Self::new(ModelConfig::default())
    }

    /// Run the model over normalized report text.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn predict(&self, text: &str) -> TriageResult<ModelOutput> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| TriageError::ModelService(format!("predict request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TriageError::ModelService(format!(
                "predict returned status {}",
                response.status()
            )));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| TriageError::ModelService(format!("invalid predict response: {e}")))?;

        Ok(ModelOutput {
            tactic_predictions: body.tactic_predictions,
            tactic_probabilities: body.tactic_probabilities,
            technique_predictions: body.technique_predictions,
            technique_probabilities: body.technique_probabilities,
        })
    }

    /// Ask the service to rebuild the model from the current corpus.
    /// Blocks until training completes; callers own the decision to run
    /// this on a background task.
    #[instrument(skip(self))]
    pub async fn retrain(&self, incremental: bool) -> TriageResult<()> {
        let response = self
            .retrain_client
            .post(format!("{}/retrain", self.base_url))
            .json(&RetrainRequest { incremental })
            .send()
            .await
            .map_err(|e| TriageError::Retrain(format!("retrain request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TriageError::Retrain(format!(
                "retrain returned status {}",
                response.status()
            )));
        }

        info!(incremental, "model retrain completed");
        Ok(())
    }

    /// Fetch the min/max calibration bounds from the latest training
    /// run's parameters artifact.
    #[instrument(skip(self))]
    pub async fn fetch_calibration(&self) -> TriageResult<CalibrationParams> {
        let response = self
            .client
            .get(format!("{}/calibration", self.base_url))
            .send()
            .await
            .map_err(|e| TriageError::ModelService(format!("calibration fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TriageError::ModelService(format!(
                "calibration fetch returned status {}",
                response.status()
            )));
        }

        let body: CalibrationResponse = response
            .json()
            .await
            .map_err(|e| TriageError::ModelService(format!("invalid calibration response: {e}")))?;

        Ok(CalibrationParams {
            tactics: body.tactics,
            techniques: body.techniques,
        })
    }
}
