mod transcript_sanitizer;

pub use transcript_sanitizer::sanitize_transcript;
