use crate::application::ports::{TranscriptionEngine, TranscriptionEngineError};

pub struct MockTranscriptionEngine {
    transcript: String,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
        }
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new("Mock transcript")
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<String, TranscriptionEngineError> {
        Ok(self.transcript.clone())
    }
}
