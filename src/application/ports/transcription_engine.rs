use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        file_name: &str,
    ) -> Result<String, TranscriptionEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionEngineError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
