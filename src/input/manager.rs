//! Input manager: turns files into bounded raw document text

use crate::error::{Result, ResumeExtractError};
use crate::extraction::{RawDocumentText, SourceKind};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_MAX_INPUT_CHARS: usize = 200_000;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_input_chars: usize,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Decode `path` and tag it with its source kind. `source_kind` overrides
    /// the kind implied by the file type.
    pub async fn load_document(
        &mut self,
        path: &Path,
        source_kind: Option<SourceKind>,
    ) -> Result<RawDocumentText> {
        let file_type = self.detect_file_type(path)?;
        let text = self.extract_text(path).await?;
        let kind = source_kind.unwrap_or_else(|| file_type.default_source_kind());

        let document = RawDocumentText::new(text, kind);
        self.check_size(&document, path)?;
        Ok(document)
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeExtractError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeExtractError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        if path.extension().is_none() {
            return Err(ResumeExtractError::InvalidInput(format!(
                "File has no extension: {}",
                path.display()
            )));
        }
        Ok(FileType::from_path(path))
    }

    fn check_size(&self, document: &RawDocumentText, path: &Path) -> Result<()> {
        let chars = document.char_count();
        if chars > self.max_input_chars {
            warn!(
                "Rejecting {}: {} characters exceeds limit of {}",
                path.display(),
                chars,
                self.max_input_chars
            );
            return Err(ResumeExtractError::InvalidInput(format!(
                "Document '{}' has {} characters, more than the allowed {}",
                path.display(),
                chars,
                self.max_input_chars
            )));
        }
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
