//! Runs every sub-extractor over one document

use crate::error::Result;
use crate::extraction::confidence::DocumentScorer;
use crate::extraction::contact::{
    ContactExtractor, EMAIL_CONFIDENCE, LOCATION_CONFIDENCE, PHONE_CONFIDENCE,
};
use crate::extraction::document::{RawDocumentText, SourceKind};
use crate::extraction::history::HistoryExtractor;
use crate::extraction::name::NameExtractor;
use crate::extraction::result::{ExtractionResult, Field};
use crate::extraction::salary::SalaryExtractor;
use crate::extraction::skills::SkillMatcher;
use crate::extraction::taxonomy::SkillTaxonomy;
use log::{debug, info};
use std::collections::BTreeMap;

/// Stateless resume field extractor.
///
/// Every pattern is compiled once in the constructor; `extract` only reads
/// them, so a single instance can be shared freely across threads. The
/// sub-extractors are independent of each other and never fail: a miss is
/// reported through empty fields, [`NOT_SPECIFIED`](crate::extraction::history::NOT_SPECIFIED)
/// or the sentinel name.
pub struct Extractor {
    scorer: DocumentScorer,
    names: NameExtractor,
    contacts: ContactExtractor,
    skills: SkillMatcher,
    history: HistoryExtractor,
    salary: SalaryExtractor,
}

impl Extractor {
    /// Extractor over the built-in skill taxonomy
    pub fn new() -> Result<Self> {
        Self::with_taxonomy(SkillTaxonomy::default())
    }

    pub fn with_taxonomy(taxonomy: SkillTaxonomy) -> Result<Self> {
        Ok(Self {
            scorer: DocumentScorer::new()?,
            names: NameExtractor::new()?,
            contacts: ContactExtractor::new()?,
            skills: SkillMatcher::new(taxonomy)?,
            history: HistoryExtractor::new()?,
            salary: SalaryExtractor::new()?,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        self.skills.taxonomy()
    }

    pub fn extract(&self, raw_text: &str, source_kind: SourceKind) -> ExtractionResult {
        self.extract_document(&RawDocumentText::new(raw_text, source_kind))
    }

    pub fn extract_document(&self, document: &RawDocumentText) -> ExtractionResult {
        let text = document.text();
        let mut confidence = BTreeMap::new();

        let name = self.names.extract(text);
        confidence.insert(Field::Name, name.confidence());

        let contact = self.contacts.extract(text);
        for (field, value, score) in [
            (Field::Email, &contact.email, EMAIL_CONFIDENCE),
            (Field::Phone, &contact.phone, PHONE_CONFIDENCE),
            (Field::Location, &contact.location, LOCATION_CONFIDENCE),
        ] {
            if value.is_some() {
                confidence.insert(field, score);
            }
        }

        let skills = self.skills.find_skills(text);
        let experience_summary = self.history.experience_summary(text);
        let education_summary = self.history.education_summary(text);
        let work_history = self.history.work_history(text);
        let salary_expectation = self.salary.extract(text).unwrap_or_default();
        let extraction_confidence = self.scorer.score(document, &self.skills);

        debug!(
            "Extracted {} skills, {} work history entries, experience '{}'",
            skills.len(),
            work_history.len(),
            experience_summary
        );
        info!(
            "Extraction finished for {} document ({} chars): confidence {}%",
            document.source_kind(),
            document.char_count(),
            extraction_confidence
        );

        ExtractionResult {
            name: name.name,
            email: contact.email.unwrap_or_default(),
            phone: contact.phone.unwrap_or_default(),
            location: contact.location.unwrap_or_default(),
            confidence,
            skills,
            experience_summary,
            education_summary,
            extraction_confidence,
            salary_expectation,
            work_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();
    }

    #[test]
    fn test_custom_taxonomy() {
        let extractor =
            Extractor::with_taxonomy(SkillTaxonomy::from_names(["R", "C"])).unwrap();
        let result = extractor.extract("I use R for stats", SourceKind::Pdf);
        assert_eq!(result.skills.len(), 1);
        assert!(result.skills.contains("R"));
        assert_eq!(extractor.taxonomy().len(), 2);
    }

    #[test]
    fn test_contact_confidence_only_for_found_fields() {
        let extractor = Extractor::new().unwrap();
        let result = extractor.extract("Call (555) 987-6543", SourceKind::Pdf);
        assert_eq!(result.phone, "(555) 987-6543");
        assert_eq!(result.field_confidence(Field::Phone), Some(85));
        assert_eq!(result.field_confidence(Field::Email), None);
        assert_eq!(result.field_confidence(Field::Location), None);
    }
}
