use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DriveClient, LlmClient, TranscriptionEngine};
use crate::application::services::TranscriptionError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    #[serde(default)]
    pub file_id: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<D, E, L>(
    State(state): State<AppState<D, E, L>>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse
where
    D: DriveClient + 'static,
    E: TranscriptionEngine + 'static,
    L: LlmClient + 'static,
{
    let file_id = request.file_id.unwrap_or_default();

    match state.transcription_service.transcribe_file(&file_id).await {
        Ok(transcript) => {
            tracing::info!(chars = transcript.len(), "Transcription successful");
            (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response()
        }
        Err(e) => {
            let status = match e {
                TranscriptionError::MissingFileId => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::error!(error = %e, "Transcription failed");
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
