use async_trait::async_trait;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, CredentialError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential file: {0}")]
    KeyFile(String),
    #[error("signing assertion failed: {0}")]
    Signing(String),
    #[error("token exchange failed: {0}")]
    Exchange(String),
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}
