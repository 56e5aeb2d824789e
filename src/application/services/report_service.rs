use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

pub const DEFAULT_EVALUATION_PROMPT: &str = "Evaluate the following interview transcript.";

pub const EVALUATOR_SYSTEM_PROMPT: &str = "You are an expert HR interview evaluator.";

pub struct ReportService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> ReportService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    pub async fn generate(
        &self,
        prompt: Option<&str>,
        transcript: &str,
    ) -> Result<String, ReportError> {
        if transcript.is_empty() {
            return Err(ReportError::MissingTranscript);
        }

        // A supplied prompt is used as-is, even when empty.
        let prompt = prompt.unwrap_or(DEFAULT_EVALUATION_PROMPT);
        let instruction = build_instruction_block(prompt, transcript);

        tracing::info!(transcript_chars = transcript.len(), "Generating evaluation report");

        let report = self
            .llm_client
            .complete(EVALUATOR_SYSTEM_PROMPT, &instruction)
            .await
            .map_err(ReportError::Generation)?;

        Ok(report.trim().to_string())
    }
}

pub fn build_instruction_block(prompt: &str, transcript: &str) -> String {
    format!("{}\n\nTranscript:\n{}", prompt, transcript)
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Missing transcript")]
    MissingTranscript,
    #[error("report generation: {0}")]
    Generation(LlmClientError),
}
