//! Save endpoint: routes a reviewed report to the export sink or the
//! training corpus, exactly one per submission.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Router};
use report_store::{route, SaveOutcome};
use std::collections::HashMap;
use triage_core::TriageError;

use crate::{AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/save", post(save))
}

/// Persist a human-confirmed report.
///
/// Export mode streams the written STIX bundle back as a download;
/// train-append mode returns an empty 204 like the original review form
/// expects.
#[utoipa::path(
    post,
    path = "/api/save",
    responses(
        (status = 200, description = "STIX bundle download (export mode)"),
        (status = 204, description = "Training example appended (train mode)"),
        (status = 422, description = "Zero or both save modes requested"),
    ),
    tag = "Save"
)]
pub(crate) async fn save(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    match route(&form, state.corpus.as_ref(), state.exporter.as_ref()).await? {
        SaveOutcome::Exported(path) => {
            let body = tokio::fs::read(&path)
                .await
                .map_err(|e| TriageError::ExportWrite(e.to_string()))?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("bundle.json");
            Ok((
                [
                    (header::CONTENT_TYPE, "application/json".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                body,
            )
                .into_response())
        }
        SaveOutcome::Appended => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
