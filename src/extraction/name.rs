//! Candidate name extraction
//!
//! Names are found by an ordered chain of patterns, from the most explicit
//! (`Name: Priya Shah` on its own line) to the loosest (any run of
//! capitalized words before a line break). Each pattern carries a fixed
//! confidence, and a hit is discarded when it contains a role or
//! document-structure keyword, in which case the chain moves on to the next
//! pattern. Only the first hit of each pattern is considered.

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder reported when no pattern yields a plausible name
pub const SENTINEL_NAME: &str = "John Doe";

/// Words that disqualify a name candidate
pub const ROLE_KEYWORDS: &[&str] = &[
    "resume",
    "cv",
    "developer",
    "engineer",
    "software",
    "professional",
    "profile",
    "application",
    "candidate",
    "job",
    "position",
    "senior",
    "junior",
];

/// Extra words rejected for bullet-point candidates, which are usually
/// contact-line labels rather than names
pub const CONTACT_KEYWORDS: &[&str] = &[
    "email",
    "phone",
    "location",
    "linkedin",
    "github",
    "portfolio",
    "contact",
];

/// The pattern that produced a name, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePattern {
    /// `Name: <value>` followed by a line break or the end of the text
    LabeledLine,
    /// `Name: <value>` anywhere
    Labeled,
    /// A single capitalized word alone on a line
    SingleWordLine,
    /// Two or three capitalized words alone on a line
    FullNameLine,
    /// `First M. Last` alone on a line
    MiddleInitialLine,
    /// Two or three capitalized words anywhere, before a line break
    TrailingCapitalized,
    /// `Name:` somewhere after a "Contact Information" header
    ContactSection,
    /// `• Name: <value>`
    BulletLabeled,
    /// `• <Capitalized Words>`
    BulletCapitalized,
    /// Nothing matched; the sentinel was used
    Sentinel,
}

impl NamePattern {
    pub fn confidence(self) -> u8 {
        match self {
            NamePattern::LabeledLine => 98,
            NamePattern::Labeled => 95,
            NamePattern::SingleWordLine => 90,
            NamePattern::FullNameLine => 85,
            NamePattern::MiddleInitialLine => 80,
            NamePattern::TrailingCapitalized => 75,
            NamePattern::ContactSection => 90,
            NamePattern::BulletLabeled => 95,
            NamePattern::BulletCapitalized => 90,
            NamePattern::Sentinel => 30,
        }
    }

    pub fn is_sentinel(self) -> bool {
        self == NamePattern::Sentinel
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    pub name: String,
    pub pattern: NamePattern,
}

impl NameMatch {
    fn sentinel() -> Self {
        Self {
            name: SENTINEL_NAME.to_string(),
            pattern: NamePattern::Sentinel,
        }
    }

    pub fn confidence(&self) -> u8 {
        self.pattern.confidence()
    }
}

struct NameRule {
    pattern: NamePattern,
    regex: Regex,
    blocklist: &'static [&'static [&'static str]],
}

impl NameRule {
    fn new(
        pattern: NamePattern,
        regex: &str,
        blocklist: &'static [&'static [&'static str]],
    ) -> Result<Self> {
        Ok(Self {
            pattern,
            regex: Regex::new(regex)?,
            blocklist,
        })
    }

    fn apply(&self, text: &str) -> Option<NameMatch> {
        let candidate = self.regex.captures(text)?.get(1)?.as_str().trim();
        if candidate.is_empty() || contains_blocked_word(candidate, self.blocklist) {
            log::debug!("Rejected name candidate '{}' ({:?})", candidate, self.pattern);
            return None;
        }
        Some(NameMatch {
            name: candidate.to_string(),
            pattern: self.pattern,
        })
    }
}

const ROLE_ONLY: &[&[&str]] = &[ROLE_KEYWORDS];
const ROLE_AND_CONTACT: &[&[&str]] = &[ROLE_KEYWORDS, CONTACT_KEYWORDS];

fn contains_blocked_word(candidate: &str, blocklist: &[&[&str]]) -> bool {
    let lowered = candidate.to_lowercase();
    blocklist
        .iter()
        .flat_map(|words| words.iter())
        .any(|word| lowered.contains(word))
}

pub struct NameExtractor {
    rules: Vec<NameRule>,
}

impl NameExtractor {
    pub fn new() -> Result<Self> {
        let rules = vec![
            NameRule::new(
                NamePattern::LabeledLine,
                r"(?i)Name:\s*([A-Za-z]+(?:[ \t]+[A-Za-z']+){0,2})(?:\r?\n|$)",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::Labeled,
                r"(?i)Name:\s*([A-Za-z]+(?:[ \t]+[A-Za-z']+){0,2})",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::SingleWordLine,
                r"(?m)^\s*(?:Name:\s*)?([A-Z][a-z]+)\s*(?:\r?\n|$)",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::FullNameLine,
                r"(?m)^\s*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z']+){1,2})\s*(?:\r?\n|$)",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::MiddleInitialLine,
                r"(?m)^\s*([A-Z][a-z]+[ \t]+[A-Z]\.?[ \t]+[A-Z][a-z]+)\s*(?:\r?\n|$)",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::TrailingCapitalized,
                r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})(?:\r?\n|$)",
                ROLE_ONLY,
            )?,
            // Secondary pass
            NameRule::new(
                NamePattern::ContactSection,
                r"(?is)Contact\s+Information.*?Name:\s*([A-Za-z]+(?:[ \t]+[A-Za-z]+){0,2})",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::BulletLabeled,
                r"(?i)[•*]\s*Name:\s*([A-Za-z]+(?:[ \t]+[A-Za-z]+){0,2})(?:\r?\n|$)",
                ROLE_ONLY,
            )?,
            NameRule::new(
                NamePattern::BulletCapitalized,
                r"[•*]\s*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){0,2})(?:\r?\n|$)",
                ROLE_AND_CONTACT,
            )?,
        ];

        Ok(Self { rules })
    }

    /// Most likely personal name; falls back to [`SENTINEL_NAME`]
    pub fn extract(&self, text: &str) -> NameMatch {
        match self.rules.iter().find_map(|rule| rule.apply(text)) {
            Some(found) => {
                log::debug!("Name matched via {:?}", found.pattern);
                found
            }
            None => {
                log::debug!("No name pattern matched, using sentinel");
                NameMatch::sentinel()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> NameMatch {
        NameExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_labeled_name_on_its_own_line() {
        let found = extract("Name: Priya Shah\nEmail: priya@example.com");
        assert_eq!(found.name, "Priya Shah");
        assert_eq!(found.pattern, NamePattern::LabeledLine);
        assert_eq!(found.confidence(), 98);
    }

    #[test]
    fn test_labeled_name_without_line_end() {
        let found = extract("Name: Priya Shah, Email: priya@example.com");
        assert_eq!(found.name, "Priya Shah");
        assert_eq!(found.confidence(), 95);
    }

    #[test]
    fn test_name_does_not_span_lines() {
        let found = extract("Name: Priya Shah\nPune");
        assert_eq!(found.name, "Priya Shah");
        assert_eq!(found.pattern, NamePattern::LabeledLine);
    }

    #[test]
    fn test_single_word_line() {
        let found = extract("Yash\nyash@example.com");
        assert_eq!(found.name, "Yash");
        assert_eq!(found.confidence(), 90);
    }

    #[test]
    fn test_full_name_line() {
        let found = extract("Jane Smith\nPhone: (555) 987-6543");
        assert_eq!(found.name, "Jane Smith");
        assert_eq!(found.confidence(), 85);
    }

    #[test]
    fn test_middle_initial_line() {
        let found = extract("Mary J. Blige\nmary@example.com");
        assert_eq!(found.name, "Mary J. Blige");
        assert_eq!(found.pattern, NamePattern::MiddleInitialLine);
        assert_eq!(found.confidence(), 80);
    }

    #[test]
    fn test_trailing_capitalized_sequence() {
        let found = extract("contact: Ada Lovelace\n");
        assert_eq!(found.name, "Ada Lovelace");
        assert_eq!(found.confidence(), 75);
    }

    #[test]
    fn test_role_line_rejected_for_labeled_name() {
        let found = extract("Senior Software Engineer\nsome text\nName: John Doe\n");
        assert_eq!(found.name, "John Doe");
        assert_eq!(found.pattern, NamePattern::LabeledLine);
    }

    #[test]
    fn test_role_words_are_never_names() {
        let found = extract("Senior Developer\n");
        assert_eq!(found.pattern, NamePattern::Sentinel);
    }

    #[test]
    fn test_bullet_single_name() {
        let found = extract("• Email: yash@example.com\n• Yash\n");
        assert_eq!(found.name, "Yash");
        assert_eq!(found.pattern, NamePattern::BulletCapitalized);
        assert_eq!(found.confidence(), 90);
    }

    #[test]
    fn test_contact_section_name() {
        let found =
            extract("Job Name: Senior developer\ncontact information\nname: priya shah\n");
        assert_eq!(found.name, "priya shah");
        assert_eq!(found.pattern, NamePattern::ContactSection);
        assert_eq!(found.confidence(), 90);
    }

    #[test]
    fn test_bullet_labeled_name() {
        let found = extract("Job Name: Senior developer\n• name: priya shah\n");
        assert_eq!(found.name, "priya shah");
        assert_eq!(found.pattern, NamePattern::BulletLabeled);
        assert_eq!(found.confidence(), 95);
    }

    #[test]
    fn test_bullet_contact_label_rejected() {
        let found = extract("• Linkedin\n");
        assert_eq!(found.pattern, NamePattern::Sentinel);
    }

    #[test]
    fn test_sentinel_for_empty_text() {
        let found = extract("");
        assert_eq!(found.name, SENTINEL_NAME);
        assert_eq!(found.confidence(), 30);
        assert!(found.pattern.is_sentinel());
    }

    #[test]
    fn test_blocklist_is_case_insensitive() {
        assert!(contains_blocked_word("RESUME Template", ROLE_ONLY));
        assert!(!contains_blocked_word("Priya Shah", ROLE_AND_CONTACT));
        assert!(contains_blocked_word("Github", ROLE_AND_CONTACT));
    }
}
