use uuid::Uuid;

use crate::application::ports::{DriveClient, DriveError};
use crate::domain::TempAudioFile;

pub struct MockDriveClient;

#[async_trait::async_trait]
impl DriveClient for MockDriveClient {
    async fn fetch_audio(&self, _file_id: &str) -> Result<TempAudioFile, DriveError> {
        // Unique name per call so parallel tests do not collide.
        let file_name = format!("mock-audio-{}.mp3", Uuid::new_v4());
        let audio_file = TempAudioFile::write(&file_name, b"mock audio bytes").await?;
        Ok(audio_file)
    }
}
