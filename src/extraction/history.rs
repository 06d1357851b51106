//! Experience, education and work history inference

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reported when neither experience nor education can be inferred
pub const NOT_SPECIFIED: &str = "Not specified";

pub const EDUCATION_EXCERPT_CHARS: usize = 100;
pub const MAX_WORK_HISTORY_ENTRIES: usize = 5;

const ELLIPSIS: &str = "...";
const CONTINUATION_MIN_CHARS: usize = 20;

/// One position from the work-history section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub title: String,
    pub company: String,
    pub period: Option<String>,
    pub description: Vec<String>,
}

pub struct HistoryExtractor {
    experience_phrases: Vec<Regex>,
    work_section: Regex,
    year: Regex,
    degree: Regex,
    degree_end: Regex,
    education_section: Regex,
    pipe_entry: Regex,
    comma_entry: Regex,
}

impl HistoryExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            experience_phrases: vec![
                Regex::new(r"(?i)([0-9]+)\+?\s*years?\s+(?:of\s+)?experience")?,
                Regex::new(r"(?i)([0-9]+)\+?\s*yrs?\s+(?:of\s+)?experience")?,
                Regex::new(r"(?i)experience:\s*([0-9]+)\+?\s*years?")?,
            ],
            work_section: Regex::new(
                r"(?is)(?:EXPERIENCE|WORK HISTORY|PROFESSIONAL EXPERIENCE)(.*?)(?:EDUCATION|SKILLS|\z)",
            )?,
            year: Regex::new(r"20[0-9]{2}")?,
            degree: Regex::new(
                r"(?i)\b(?:Bachelor|Master|Ph\.?D|B\.S\.|M\.S\.|B\.A\.|M\.A\.|(?:BS|MS|BA|MA)\b)",
            )?,
            // A degree excerpt runs to the next blank line or capitalized line
            degree_end: Regex::new(r"\n\s*\n|\n[A-Z]")?,
            education_section: Regex::new(r"(?is)EDUCATION:(.*?)(?:\n\s*\n|\z)")?,
            pipe_entry: Regex::new(r"^[A-Z][^|]*\|")?,
            comma_entry: Regex::new(r"^[A-Z][^,]*,\s*[A-Z]")?,
        })
    }

    /// `"<N> years"` from an explicit phrase, `"<N>+ years"` inferred from the
    /// span of years in the work-history section, or [`NOT_SPECIFIED`]
    pub fn experience_summary(&self, text: &str) -> String {
        if let Some(years) = self
            .experience_phrases
            .iter()
            .find_map(|regex| regex.captures(text).and_then(|caps| caps.get(1)))
        {
            return format!("{} years", years.as_str());
        }

        match self.years_from_work_section(text) {
            Some(span) => format!("{}+ years", span),
            None => NOT_SPECIFIED.to_string(),
        }
    }

    fn years_from_work_section(&self, text: &str) -> Option<u32> {
        let section = self.work_section_text(text)?;
        let years: BTreeSet<u32> = self
            .year
            .find_iter(section)
            .filter_map(|mat| mat.as_str().parse().ok())
            .collect();

        if years.len() < 2 {
            return None;
        }
        let first = years.iter().next()?;
        let last = years.iter().next_back()?;
        Some((last - first).max(1))
    }

    fn work_section_text<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.work_section
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|section| section.as_str())
    }

    /// Truncated degree or `EDUCATION:` excerpt, or [`NOT_SPECIFIED`]
    pub fn education_summary(&self, text: &str) -> String {
        match self.degree_excerpt(text).or_else(|| self.education_section_excerpt(text)) {
            Some(excerpt) => truncate_excerpt(&excerpt),
            None => NOT_SPECIFIED.to_string(),
        }
    }

    fn degree_excerpt(&self, text: &str) -> Option<String> {
        let keyword = self.degree.find(text)?;
        let end = self
            .degree_end
            .find_at(text, keyword.end())
            .map_or(text.len(), |terminator| terminator.start());
        non_empty(&text[keyword.start()..end])
    }

    fn education_section_excerpt(&self, text: &str) -> Option<String> {
        let body = self.education_section.captures(text)?.get(1)?;
        non_empty(body.as_str())
    }

    /// Positions listed in the work-history section, most recent first as
    /// written, capped at [`MAX_WORK_HISTORY_ENTRIES`]
    pub fn work_history(&self, text: &str) -> Vec<WorkHistoryEntry> {
        let Some(section) = self.work_section_text(text) else {
            return Vec::new();
        };

        let mut entries: Vec<WorkHistoryEntry> = Vec::new();
        for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(detail) = strip_bullet(line) {
                if let Some(current) = entries.last_mut() {
                    current.description.push(detail.to_string());
                }
            } else if self.pipe_entry.is_match(line) {
                entries.push(entry_from_parts(line.split('|')));
            } else if self.comma_entry.is_match(line) {
                entries.push(entry_from_parts(line.splitn(2, ',')));
            } else if line.chars().count() > CONTINUATION_MIN_CHARS {
                if let Some(current) = entries.last_mut() {
                    current.description.push(line.to_string());
                }
            }
        }

        entries.truncate(MAX_WORK_HISTORY_ENTRIES);
        entries
    }
}

fn entry_from_parts<'a>(parts: impl Iterator<Item = &'a str>) -> WorkHistoryEntry {
    let mut parts = parts.map(str::trim);
    let title = parts.next().unwrap_or_default().to_string();
    let company = parts.next().unwrap_or_default().to_string();
    let period = parts.next().filter(|p| !p.is_empty()).map(str::to_string);

    WorkHistoryEntry {
        title,
        company,
        period,
        description: Vec::new(),
    }
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix('•')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('-'))
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
}

fn non_empty(excerpt: &str) -> Option<String> {
    let trimmed = excerpt.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First [`EDUCATION_EXCERPT_CHARS`] characters plus an ellipsis marker
pub fn truncate_excerpt(excerpt: &str) -> String {
    let mut truncated: String = excerpt.chars().take(EDUCATION_EXCERPT_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
