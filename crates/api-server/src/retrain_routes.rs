//! Retrain trigger: fire-and-forget rebuild of the model from the
//! current corpus, off the request path.

use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use confidence_calibrator::CalibrationSnapshot;
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use tracing::{error, info};
use triage_core::{TriageError, TriageResult};

use crate::{ApiResponse, AppError, AppState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RetrainForm {
    #[serde(default)]
    pub incremental: bool,
}

#[derive(Debug, Serialize)]
pub struct RetrainAccepted {
    pub started: bool,
    pub incremental: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/retrain", post(retrain))
}

/// Kick off a retrain cycle on a background task.
///
/// Predictions keep serving against the current snapshot while training
/// runs; a completed cycle publishes fresh calibration bounds. Failure
/// is logged and surfaced on the next trigger, never retried on a loop.
#[utoipa::path(
    post,
    path = "/api/retrain",
    request_body = RetrainForm,
    responses(
        (status = 200, description = "Retrain started"),
        (status = 422, description = "A retrain cycle is already running"),
    ),
    tag = "Retrain"
)]
pub(crate) async fn retrain(
    State(state): State<AppState>,
    Form(form): Form<RetrainForm>,
) -> Result<Json<ApiResponse<RetrainAccepted>>, AppError> {
    if state.retrain_running.swap(true, Ordering::SeqCst) {
        return Err(TriageError::InvalidRequest(
            "a retrain cycle is already running".to_string(),
        )
        .into());
    }

    let incremental = form.incremental;
    tokio::spawn(run_retrain_cycle(state, incremental));

    Ok(Json(ApiResponse::success(RetrainAccepted {
        started: true,
        incremental,
    })))
}

async fn run_retrain_cycle(state: AppState, incremental: bool) {
    let result = retrain_and_reload(&state, incremental).await;
    state.retrain_running.store(false, Ordering::SeqCst);
    match result {
        Ok(()) => info!(incremental, "retrain cycle finished"),
        Err(err) => error!(error = %err, "retrain cycle failed"),
    }
}

async fn retrain_and_reload(state: &AppState, incremental: bool) -> TriageResult<()> {
    state.provider.retrain(incremental).await?;
    let params = state.provider.fetch_calibration().await?;
    let snapshot = CalibrationSnapshot::from_params(&params)?;
    state.publish_snapshot(snapshot).await;
    Ok(())
}
