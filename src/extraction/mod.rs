//! Resume field extraction engine

pub mod document;
pub mod taxonomy;
pub mod skills;
pub mod confidence;
pub mod name;
pub mod contact;
pub mod history;
pub mod salary;
pub mod result;
pub mod extractor;

pub use document::{RawDocumentText, SourceKind};
pub use extractor::Extractor;
pub use result::{ExtractionResult, Field};
pub use taxonomy::{SkillCategory, SkillTaxonomy};
