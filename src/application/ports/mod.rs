mod drive_client;
mod llm_client;
mod token_provider;
mod transcription_engine;

pub use drive_client::{DriveClient, DriveError};
pub use llm_client::{LlmClient, LlmClientError};
pub use token_provider::{CredentialError, TokenProvider};
pub use transcription_engine::{TranscriptionEngine, TranscriptionEngineError};
