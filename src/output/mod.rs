//! Output formatting for extraction results

pub mod formatter;

pub use formatter::{JsonFormatter, ConsoleFormatter, OutputFormatter, ReportGenerator};
