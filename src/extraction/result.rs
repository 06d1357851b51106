//! The record produced for every document

use crate::extraction::history::{WorkHistoryEntry, NOT_SPECIFIED};
use crate::extraction::name::SENTINEL_NAME;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Fields that carry a per-field confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Location,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Phone => write!(f, "phone"),
            Field::Location => write!(f, "location"),
        }
    }
}

/// Extraction output. Undetected text fields are empty strings and have no
/// entry in `confidence`; `name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub confidence: BTreeMap<Field, u8>,
    pub skills: BTreeSet<String>,
    pub experience_summary: String,
    pub education_summary: String,
    pub extraction_confidence: u8,
    pub salary_expectation: String,
    pub work_history: Vec<WorkHistoryEntry>,
}

impl ExtractionResult {
    pub fn field_confidence(&self, field: Field) -> Option<u8> {
        self.confidence.get(&field).copied()
    }

    /// True when the name is the placeholder rather than a detected value
    pub fn has_placeholder_name(&self) -> bool {
        self.name == SENTINEL_NAME && self.field_confidence(Field::Name) == Some(30)
    }

    pub fn experience_specified(&self) -> bool {
        self.experience_summary != NOT_SPECIFIED
    }

    pub fn education_specified(&self) -> bool {
        self.education_summary != NOT_SPECIFIED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder() -> ExtractionResult {
        let mut confidence = BTreeMap::new();
        confidence.insert(Field::Name, 30);
        ExtractionResult {
            name: SENTINEL_NAME.to_string(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            confidence,
            skills: BTreeSet::new(),
            experience_summary: NOT_SPECIFIED.to_string(),
            education_summary: NOT_SPECIFIED.to_string(),
            extraction_confidence: 70,
            salary_expectation: String::new(),
            work_history: Vec::new(),
        }
    }

    #[test]
    fn test_confidence_serializes_as_object() {
        let json = serde_json::to_value(placeholder()).unwrap();
        assert_eq!(json["confidence"]["name"], 30);
        assert!(json["confidence"].get("email").is_none());
        assert_eq!(json["experience_summary"], "Not specified");
    }

    #[test]
    fn test_placeholder_helpers() {
        let result = placeholder();
        assert!(result.has_placeholder_name());
        assert!(!result.experience_specified());
        assert!(!result.education_specified());
        assert_eq!(result.field_confidence(Field::Phone), None);
    }

    #[test]
    fn test_round_trip_through_json() {
        let original = placeholder();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
