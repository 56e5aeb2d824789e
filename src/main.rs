use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use tawau::application::services::{ReportService, TranscriptionService};
use tawau::infrastructure::audio::OpenAiWhisperEngine;
use tawau::infrastructure::drive::{
    GoogleDriveClient, ServiceAccountKey, ServiceAccountTokenProvider,
};
use tawau::infrastructure::llm::OpenAiChatClient;
use tawau::infrastructure::observability::{TracingConfig, init_tracing};
use tawau::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let key = ServiceAccountKey::from_file(&settings.google.credentials_path)?;
    let token_provider = Arc::new(ServiceAccountTokenProvider::new(key));
    let drive_client = Arc::new(GoogleDriveClient::new(
        token_provider,
        settings.google.drive_base_url.clone(),
    ));

    let whisper_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.whisper_model.clone()),
    ));

    let chat_client = Arc::new(OpenAiChatClient::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.chat_model.clone()),
        settings.openai.chat_temperature,
    ));

    let transcription_service = Arc::new(TranscriptionService::new(drive_client, whisper_engine));
    let report_service = Arc::new(ReportService::new(chat_client));

    let state = AppState {
        transcription_service,
        report_service,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
