//! Prediction endpoint: normalized text in, two ranked result sets out.

use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use confidence_calibrator::rank;
use serde::{Deserialize, Serialize};
use triage_core::RankedPredictions;

use crate::{ApiResponse, AppError, AppState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PredictForm {
    /// Raw report text as submitted by the analyst.
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PredictBody {
    /// The submitted report, echoed for the result view.
    pub report: String,
    pub tactics: RankedPredictions,
    pub techniques: RankedPredictions,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/predict", post(predict))
}

/// Classify a report against both label universes.
#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = PredictForm,
    responses(
        (status = 200, description = "Ranked tactic and technique predictions"),
        (status = 400, description = "Report text could not be decoded"),
        (status = 502, description = "Model collaborator unavailable")
    ),
    tag = "Predict"
)]
pub(crate) async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Json<ApiResponse<PredictBody>>, AppError> {
    let text = report_normalizer::decode_report(&form.message)?;

    let snapshot = state.current_snapshot().await?;
    let output = state.provider.predict(&text).await?;

    let tactics = rank(
        label_catalog::tactics(),
        &output.tactic_predictions,
        &output.tactic_probabilities,
        &snapshot.tactics,
    )?;
    let techniques = rank(
        label_catalog::techniques(),
        &output.technique_predictions,
        &output.technique_probabilities,
        &snapshot.techniques,
    )?;

    Ok(Json(ApiResponse::success(PredictBody {
        report: form.message,
        tactics,
        techniques,
    })))
}
