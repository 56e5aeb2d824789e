pub mod audio;
pub mod drive;
mod http;
pub mod llm;
pub mod observability;
pub mod text_processing;
