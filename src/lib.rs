//! Resume extraction library

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeExtractError};
pub use extraction::{ExtractionResult, Extractor, Field, RawDocumentText, SourceKind};
