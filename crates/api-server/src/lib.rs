//! HTTP transport for the TTP triage service.
//!
//! Three write actions (save-export, save-train, retrain) and one read
//! action (predict), all form-encoded like the review UI submits them.
//! Everything behind the handlers is a library crate; this crate only
//! owns wiring, the response envelope and error-to-status mapping.

mod predict_routes;
mod retrain_routes;
mod save_routes;
pub mod state;

pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use triage_core::TriageError;
use utoipa::OpenApi;

/// Standard JSON envelope for non-file responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error wrapper translating the domain taxonomy into HTTP statuses.
/// User errors surface as 4xx; broken invariants and collaborator
/// failures abort with 5xx and never produce a partial result.
#[derive(Debug)]
pub struct AppError(pub TriageError);

impl From<TriageError> for AppError {
    fn from(err: TriageError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TriageError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriageError::Decoding(_) => StatusCode::BAD_REQUEST,
            TriageError::ModelService(_) | TriageError::Retrain(_) => StatusCode::BAD_GATEWAY,
            TriageError::Calibration(_)
            | TriageError::DimensionMismatch(_)
            | TriageError::DataIntegrity(_)
            | TriageError::CorpusWrite(_)
            | TriageError::ExportWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "request aborted");
        } else {
            warn!(error = %self.0, "request rejected");
        }

        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        predict_routes::predict,
        save_routes::save,
        retrain_routes::retrain,
    ),
    info(title = "ttp-triage", description = "ATT&CK tactic/technique triage API")
)]
struct ApiDoc;

/// Build the full application router over shared state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(predict_routes::routes())
        .merge(save_routes::routes())
        .merge(retrain_routes::routes())
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Entry point used by the binary: config from the environment, catalog
/// integrity check before accepting traffic, then serve until shutdown.
pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    label_catalog::validate()?;
    info!(
        tactics = label_catalog::tactics().len(),
        techniques = label_catalog::techniques().len(),
        "label catalog validated"
    );

    let state = AppState::from_env()?;
    let app = app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "api-server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
