use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{DriveClient, DriveError, TokenProvider};
use crate::domain::TempAudioFile;
use crate::infrastructure::http::http_client;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const METADATA_TIMEOUT: Duration = Duration::from_secs(120);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

pub struct GoogleDriveClient {
    client: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
    base_url: String,
}

impl GoogleDriveClient {
    pub fn new(token_provider: Arc<dyn TokenProvider>, base_url: Option<String>) -> Self {
        Self {
            client: http_client(METADATA_TIMEOUT),
            token_provider,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn resolve_file_name(&self, file_id: &str, token: &str) -> Result<String, DriveError> {
        let url = format!("{}/drive/v3/files/{}?fields=name", self.base_url, file_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DriveError::Metadata(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DriveError::Metadata(format!("status {}: {}", status, body)));
        }

        let metadata: FileMetadata = response
            .json()
            .await
            .map_err(|e| DriveError::Metadata(format!("parse: {}", e)))?;

        Ok(metadata.name)
    }
}

#[derive(Deserialize)]
struct FileMetadata {
    name: String,
}

#[async_trait]
impl DriveClient for GoogleDriveClient {
    async fn fetch_audio(&self, file_id: &str) -> Result<TempAudioFile, DriveError> {
        let token = self.token_provider.access_token().await?;

        let name = self.resolve_file_name(file_id, &token).await?;
        let file_name = format!("{}.mp3", sanitize_file_name(&file_stem(&name)));

        tracing::info!(file_id, name = %name, "Downloading audio from Drive");

        let url = format!("{}/drive/v3/files/{}?alt=media", self.base_url, file_id);
        let response = self
            .client
            .get(&url)
            .timeout(DOWNLOAD_TIMEOUT)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| DriveError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DriveError::Download { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DriveError::Request(format!("body: {}", e)))?;

        let audio_file = TempAudioFile::write(&file_name, &bytes).await?;

        tracing::info!(
            path = %audio_file.path().display(),
            bytes = bytes.len(),
            "Audio saved to temp file"
        );

        Ok(audio_file)
    }
}

// Final path component without its last extension. Inner dots are kept.
fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
        .to_string()
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\n' | '\r' | '\t' => '_',
            _ => c,
        })
        .collect()
}
