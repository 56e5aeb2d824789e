use crate::application::ports::{LlmClient, LlmClientError};

pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_message: &str,
    ) -> Result<String, LlmClientError> {
        Ok("Mock report".to_string())
    }
}
