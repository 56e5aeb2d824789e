mod health;
mod report;
mod transcribe;

pub use health::health_handler;
pub use report::generate_report_handler;
pub use transcribe::transcribe_handler;
