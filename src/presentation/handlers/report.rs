use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DriveClient, LlmClient, TranscriptionEngine};
use crate::application::services::ReportError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateReportResponse {
    pub report: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_report_handler<D, E, L>(
    State(state): State<AppState<D, E, L>>,
    Json(request): Json<GenerateReportRequest>,
) -> impl IntoResponse
where
    D: DriveClient + 'static,
    E: TranscriptionEngine + 'static,
    L: LlmClient + 'static,
{
    if let Some(prompt) = request.prompt.as_deref() {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "Processing report request");
    }

    let transcript = request.transcript.unwrap_or_default();

    match state
        .report_service
        .generate(request.prompt.as_deref(), &transcript)
        .await
    {
        Ok(report) => {
            tracing::info!(chars = report.len(), "Report generated");
            (StatusCode::OK, Json(GenerateReportResponse { report })).into_response()
        }
        Err(e) => {
            let status = match e {
                ReportError::MissingTranscript => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::error!(error = %e, "Report generation failed");
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
