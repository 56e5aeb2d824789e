use std::path::{Path, PathBuf};

/// Audio file below the temp directory, removed from disk on drop.
#[derive(Debug)]
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    pub async fn write(file_name: &str, contents: &[u8]) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(file_name);
        tokio::fs::write(&path, contents).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temporary audio file"
                );
            }
        }
    }
}
