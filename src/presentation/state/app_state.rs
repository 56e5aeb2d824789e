use std::sync::Arc;

use crate::application::ports::{DriveClient, LlmClient, TranscriptionEngine};
use crate::application::services::{ReportService, TranscriptionService};

pub struct AppState<D, E, L>
where
    D: DriveClient,
    E: TranscriptionEngine,
    L: LlmClient,
{
    pub transcription_service: Arc<TranscriptionService<D, E>>,
    pub report_service: Arc<ReportService<L>>,
}

impl<D, E, L> Clone for AppState<D, E, L>
where
    D: DriveClient,
    E: TranscriptionEngine,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            report_service: Arc::clone(&self.report_service),
        }
    }
}
