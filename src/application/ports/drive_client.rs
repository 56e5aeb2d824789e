use async_trait::async_trait;

use crate::application::ports::CredentialError;
use crate::domain::TempAudioFile;

#[async_trait]
pub trait DriveClient: Send + Sync {
    async fn fetch_audio(&self, file_id: &str) -> Result<TempAudioFile, DriveError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error("credential: {0}")]
    Credential(#[from] CredentialError),
    #[error("metadata lookup failed: {0}")]
    Metadata(String),
    #[error("download request failed: {0}")]
    Request(String),
    #[error("download failed: status {status}: {body}")]
    Download { status: u16, body: String },
    #[error("temp file write failed: {0}")]
    Io(#[from] std::io::Error),
}
