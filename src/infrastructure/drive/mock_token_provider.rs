use crate::application::ports::{CredentialError, TokenProvider};

pub struct MockTokenProvider;

#[async_trait::async_trait]
impl TokenProvider for MockTokenProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        Ok("mock-access-token".to_string())
    }
}
