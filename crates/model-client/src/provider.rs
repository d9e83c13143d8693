use crate::ModelClient;
use async_trait::async_trait;
use triage_core::{CalibrationParams, ClassifierProvider, ModelOutput, TriageResult};

/// [`ClassifierProvider`] backed by the HTTP model service.
#[derive(Clone)]
pub struct HttpClassifierProvider {
    client: ModelClient,
}

impl HttpClassifierProvider {
    pub fn new(client: ModelClient) -> Self {
        Self { client }
    }
}

impl From<ModelClient> for HttpClassifierProvider {
    fn from(client: ModelClient) -> Self {
        Self::new(client)
    }
}

#[async_trait]
impl ClassifierProvider for HttpClassifierProvider {
    async fn predict(&self, text: &str) -> TriageResult<ModelOutput> {
        self.client.predict(text).await
    }

    async fn retrain(&self, incremental: bool) -> TriageResult<()> {
        self.client.retrain(incremental).await
    }

    async fn fetch_calibration(&self) -> TriageResult<CalibrationParams> {
        self.client.fetch_calibration().await
    }
}
