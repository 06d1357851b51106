//! Error handling for the resume extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Pattern compilation error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Skill index error: {0}")]
    SkillIndex(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ResumeExtractError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeExtractError {
    fn from(err: anyhow::Error) -> Self {
        ResumeExtractError::Processing(err.to_string())
    }
}

/// Convert Aho-Corasick build errors to our custom error type
impl From<aho_corasick::BuildError> for ResumeExtractError {
    fn from(err: aho_corasick::BuildError) -> Self {
        ResumeExtractError::SkillIndex(err.to_string())
    }
}
