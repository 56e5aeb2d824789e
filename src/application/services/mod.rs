mod report_service;
mod transcription_service;

pub use report_service::{
    DEFAULT_EVALUATION_PROMPT, EVALUATOR_SYSTEM_PROMPT, ReportError, ReportService,
    build_instruction_block,
};
pub use transcription_service::{TranscriptionError, TranscriptionService};
