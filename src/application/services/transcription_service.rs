use std::sync::Arc;

use crate::application::ports::{
    DriveClient, DriveError, TranscriptionEngine, TranscriptionEngineError,
};
use crate::infrastructure::text_processing::sanitize_transcript;

pub struct TranscriptionService<D, E>
where
    D: DriveClient,
    E: TranscriptionEngine,
{
    drive_client: Arc<D>,
    engine: Arc<E>,
}

impl<D, E> TranscriptionService<D, E>
where
    D: DriveClient,
    E: TranscriptionEngine,
{
    pub fn new(drive_client: Arc<D>, engine: Arc<E>) -> Self {
        Self {
            drive_client,
            engine,
        }
    }

    pub async fn transcribe_file(&self, file_id: &str) -> Result<String, TranscriptionError> {
        if file_id.is_empty() {
            return Err(TranscriptionError::MissingFileId);
        }

        let audio_file = self.drive_client.fetch_audio(file_id).await?;

        let audio_data = tokio::fs::read(audio_file.path())
            .await
            .map_err(TranscriptionError::ReadAudio)?;

        tracing::info!(file_id, bytes = audio_data.len(), "Transcribing audio");

        let raw_transcript = self
            .engine
            .transcribe(&audio_data, audio_file.file_name())
            .await
            .map_err(TranscriptionError::Engine)?;

        Ok(sanitize_transcript(&raw_transcript))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("Missing file_id")]
    MissingFileId,
    #[error("drive: {0}")]
    Drive(#[from] DriveError),
    #[error("audio read: {0}")]
    ReadAudio(std::io::Error),
    #[error("transcription: {0}")]
    Engine(TranscriptionEngineError),
}
