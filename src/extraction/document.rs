//! Raw document text handed to the extractor

use crate::error::{Result, ResumeExtractError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the raw text came from. Word-processor text is considered more
/// reliable than text reconstructed from a PDF layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Pdf,
    WordProcessor,
}

impl FromStr for SourceKind {
    type Err = ResumeExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(SourceKind::Pdf),
            "word" | "wordprocessor" | "word_processor" | "word-processor" | "docx" | "doc" => {
                Ok(SourceKind::WordProcessor)
            }
            other => Err(ResumeExtractError::InvalidInput(format!(
                "Unknown source kind: '{}'. Supported: pdf, word",
                other
            ))),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Pdf => write!(f, "PDF"),
            SourceKind::WordProcessor => write!(f, "Word processor"),
        }
    }
}

/// The full extracted text of one document together with its source kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocumentText {
    text: String,
    source_kind: SourceKind,
}

impl RawDocumentText {
    pub fn new(text: impl Into<String>, source_kind: SourceKind) -> Self {
        Self {
            text: text.into(),
            source_kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    /// Length in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_parsing() {
        assert_eq!("pdf".parse::<SourceKind>().unwrap(), SourceKind::Pdf);
        assert_eq!(" PDF ".parse::<SourceKind>().unwrap(), SourceKind::Pdf);
        assert_eq!("word".parse::<SourceKind>().unwrap(), SourceKind::WordProcessor);
        assert_eq!("docx".parse::<SourceKind>().unwrap(), SourceKind::WordProcessor);
    }

    #[test]
    fn test_unknown_source_kind_is_invalid_input() {
        let err = "rtf".parse::<SourceKind>().unwrap_err();
        assert!(matches!(err, ResumeExtractError::InvalidInput(_)));
    }

    #[test]
    fn test_char_count_is_not_byte_count() {
        let doc = RawDocumentText::new("José • Ruiz", SourceKind::Pdf);
        assert_eq!(doc.char_count(), 11);
        assert!(doc.text().len() > 11);
    }
}
