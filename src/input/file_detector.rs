//! File type detection

use crate::extraction::SourceKind;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(FileType::Unknown, Self::from_extension)
    }

    /// Source kind assumed for text decoded from this file type. Plain text
    /// and markdown are treated as already-converted word-processor output.
    pub fn default_source_kind(&self) -> SourceKind {
        match self {
            FileType::Pdf => SourceKind::Pdf,
            FileType::Text | FileType::Markdown | FileType::Unknown => SourceKind::WordProcessor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert_eq!(FileType::from_path(Path::new("cv.PDF")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("cv.md")), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("cv")), FileType::Unknown);
        assert_eq!(FileType::Pdf.default_source_kind(), SourceKind::Pdf);
        assert_eq!(FileType::Text.default_source_kind(), SourceKind::WordProcessor);
    }
}
