//! Whole-word skill matching against the taxonomy

use crate::error::Result;
use crate::extraction::taxonomy::SkillTaxonomy;
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

/// Finds taxonomy entries in free text.
///
/// All entries are compiled into one case-insensitive automaton and searched
/// with overlapping semantics, so every occurrence of every entry is seen once.
/// A hit only counts when it is bounded by non-word characters (or the text
/// edges): `R` never matches inside `Director`, and `Java` never matches inside
/// `JavaScript`.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    taxonomy: SkillTaxonomy,
}

impl SkillMatcher {
    pub fn new(taxonomy: SkillTaxonomy) -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(taxonomy.names())?;

        Ok(Self {
            automaton,
            taxonomy,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    /// Canonical names of every entry found at least once as a whole word
    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        let entries = self.taxonomy.entries();
        self.automaton
            .find_overlapping_iter(text)
            .filter(|mat| is_whole_word(text, mat.start(), mat.end()))
            .map(|mat| entries[mat.pattern().as_usize()].name.clone())
            .collect()
    }

    /// True as soon as any entry occurs as a whole word
    pub fn contains_any(&self, text: &str) -> bool {
        self.automaton
            .find_overlapping_iter(text)
            .any(|mat| is_whole_word(text, mat.start(), mat.end()))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text.get(..start).and_then(|s| s.chars().next_back());
    let after = text.get(end..).and_then(|s| s.chars().next());

    !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(names: &[&str]) -> SkillMatcher {
        SkillMatcher::new(SkillTaxonomy::from_names(names.iter().copied())).unwrap()
    }

    #[test]
    fn test_short_skills_need_word_boundaries() {
        let matcher = matcher(&["R", "C"]);
        assert!(matcher.find_skills("Director of Engineering").is_empty());
        assert!(!matcher.contains_any("Director of Engineering"));

        let found = matcher.find_skills("I use R for stats");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["R".to_string()]);
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let matcher = SkillMatcher::new(SkillTaxonomy::default()).unwrap();
        let found = matcher.find_skills("Frontend work in JavaScript and TypeScript");
        assert!(found.contains("JavaScript"));
        assert!(found.contains("TypeScript"));
        assert!(!found.contains("Java"));
    }

    #[test]
    fn test_case_insensitive_and_deduplicated() {
        let matcher = SkillMatcher::new(SkillTaxonomy::default()).unwrap();
        let found = matcher.find_skills("python, PYTHON and Python; docker + node.js");
        let names: Vec<&str> = found.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["Docker", "Node.js", "Python"]);
    }

    #[test]
    fn test_punctuated_skills() {
        let matcher = matcher(&["C++", "CI/CD"]);
        let found = matcher.find_skills("Built CI/CD pipelines for C++, mostly.");
        assert_eq!(found.len(), 2);
        assert!(matcher.find_skills("ACI/CDE").is_empty());
    }

    #[test]
    fn test_later_occurrence_counts_when_first_is_embedded() {
        let matcher = matcher(&["Go"]);
        assert!(matcher.find_skills("Google, then Go services").contains("Go"));
    }

    #[test]
    fn test_empty_taxonomy_matches_nothing() {
        let matcher = SkillMatcher::new(SkillTaxonomy::empty()).unwrap();
        assert!(matcher.find_skills("Python Rust Go").is_empty());
    }
}
