//! Document-level extraction confidence

use crate::error::Result;
use crate::extraction::document::{RawDocumentText, SourceKind};
use crate::extraction::skills::SkillMatcher;
use regex::Regex;

pub const BASE_CONFIDENCE: u8 = 70;
pub const MAX_CONFIDENCE: u8 = 95;

const LONG_TEXT_CHARS: usize = 1000;
const LONG_TEXT_BONUS: u8 = 10;
const VERY_LONG_TEXT_CHARS: usize = 2000;
const VERY_LONG_TEXT_BONUS: u8 = 5;
const EMAIL_BONUS: u8 = 5;
const PHONE_BONUS: u8 = 5;
const NAME_BONUS: u8 = 5;
const SKILLS_BONUS: u8 = 10;
const WORD_PROCESSOR_BONUS: u8 = 5;

/// Scores how legible a document is as a whole, independent of which fields
/// the extractors later manage to find. Never reports full certainty.
pub struct DocumentScorer {
    email_regex: Regex,
    phone_regex: Regex,
    name_line_regex: Regex,
}

/// Which structural signals contributed to a document score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentSignals {
    pub long_text: bool,
    pub very_long_text: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_name_line: bool,
    pub has_skills: bool,
    pub word_processor: bool,
}

impl DocumentSignals {
    pub fn score(&self) -> u8 {
        let bonuses = [
            (self.long_text, LONG_TEXT_BONUS),
            (self.very_long_text, VERY_LONG_TEXT_BONUS),
            (self.has_email, EMAIL_BONUS),
            (self.has_phone, PHONE_BONUS),
            (self.has_name_line, NAME_BONUS),
            (self.has_skills, SKILLS_BONUS),
            (self.word_processor, WORD_PROCESSOR_BONUS),
        ];

        let total = bonuses
            .iter()
            .filter(|(present, _)| *present)
            .fold(BASE_CONFIDENCE, |acc, (_, bonus)| acc.saturating_add(*bonus));

        total.min(MAX_CONFIDENCE)
    }
}

impl DocumentScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(r"@[\w.-]+\.\w+")?,
            phone_regex: Regex::new(r"\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")?,
            name_line_regex: Regex::new(r"(?m)^[A-Z][a-z]+\s+[A-Z][a-z]+")?,
        })
    }

    pub fn signals(&self, document: &RawDocumentText, skills: &SkillMatcher) -> DocumentSignals {
        let text = document.text();
        let length = document.char_count();

        DocumentSignals {
            long_text: length > LONG_TEXT_CHARS,
            very_long_text: length > VERY_LONG_TEXT_CHARS,
            has_email: self.email_regex.is_match(text),
            has_phone: self.phone_regex.is_match(text),
            has_name_line: self.name_line_regex.is_match(text),
            has_skills: skills.contains_any(text),
            word_processor: document.source_kind() == SourceKind::WordProcessor,
        }
    }

    pub fn score(&self, document: &RawDocumentText, skills: &SkillMatcher) -> u8 {
        self.signals(document, skills).score()
    }
}
