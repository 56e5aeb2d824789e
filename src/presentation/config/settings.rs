use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_WHISPER_MODEL: &str = "whisper-1";
const DEFAULT_CHAT_MODEL: &str = "gpt-4";
const DEFAULT_CHAT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub google: GoogleSettings,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GoogleSettings {
    pub credentials_path: PathBuf,
    pub drive_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub whisper_model: String,
    pub chat_model: String,
    pub chat_temperature: f32,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let (api_key, credentials_path) = require_credentials(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
        )?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let chat_temperature = match std::env::var("CHAT_TEMPERATURE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidTemperature(raw))?,
            Err(_) => DEFAULT_CHAT_TEMPERATURE,
        };

        Ok(Self {
            server: ServerSettings { port },
            google: GoogleSettings {
                credentials_path,
                drive_base_url: std::env::var("DRIVE_BASE_URL").ok(),
            },
            openai: OpenAiSettings {
                api_key,
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                whisper_model: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| DEFAULT_WHISPER_MODEL.to_string()),
                chat_model: std::env::var("CHAT_MODEL")
                    .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
                chat_temperature,
            },
        })
    }
}

/// Startup gate: the API key must be non-empty and the key-file path must exist.
pub fn require_credentials(
    api_key: Option<String>,
    credentials_path: Option<String>,
) -> Result<(String, PathBuf), SettingsError> {
    let api_key = match api_key {
        Some(key) if !key.is_empty() => key,
        _ => return Err(SettingsError::MissingApiKey),
    };

    let path = match credentials_path {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => return Err(SettingsError::MissingCredentials),
    };

    if !path.exists() {
        return Err(SettingsError::CredentialsPathNotFound(path));
    }

    Ok((api_key, path))
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("GOOGLE_APPLICATION_CREDENTIALS is not set")]
    MissingCredentials,
    #[error("GOOGLE_APPLICATION_CREDENTIALS path does not exist: {}", .0.display())]
    CredentialsPathNotFound(PathBuf),
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
    #[error("invalid CHAT_TEMPERATURE value: {0}")]
    InvalidTemperature(String),
}
