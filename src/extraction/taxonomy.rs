//! Canonical skill names the skill matcher looks for

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguage,
    WebTechnology,
    Database,
    CloudPlatform,
    DevOps,
    VersionControl,
    DataScience,
    SoftSkill,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::ProgrammingLanguage,
        SkillCategory::WebTechnology,
        SkillCategory::Database,
        SkillCategory::CloudPlatform,
        SkillCategory::DevOps,
        SkillCategory::VersionControl,
        SkillCategory::DataScience,
        SkillCategory::SoftSkill,
        SkillCategory::Other,
    ];

    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(|c: char| c == '-' || c == ' ', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == normalized)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguage => "programming_language",
            SkillCategory::WebTechnology => "web_technology",
            SkillCategory::Database => "database",
            SkillCategory::CloudPlatform => "cloud_platform",
            SkillCategory::DevOps => "devops",
            SkillCategory::VersionControl => "version_control",
            SkillCategory::DataScience => "data_science",
            SkillCategory::SoftSkill => "soft_skill",
            SkillCategory::Other => "other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillCategory::ProgrammingLanguage => "Programming Languages",
            SkillCategory::WebTechnology => "Web Technologies",
            SkillCategory::Database => "Databases",
            SkillCategory::CloudPlatform => "Cloud Platforms",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::VersionControl => "Version Control",
            SkillCategory::DataScience => "Data Science",
            SkillCategory::SoftSkill => "Soft Skills",
            SkillCategory::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
}

/// Ordered, case-insensitively deduplicated set of skill names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTaxonomy {
    entries: Vec<SkillEntry>,
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        let mut taxonomy = Self::empty();
        for (name, category) in DEFAULT_SKILLS {
            taxonomy.insert(name, *category);
        }
        taxonomy
    }
}

impl SkillTaxonomy {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a taxonomy from bare names, all filed under [`SkillCategory::Other`]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_additional(names)
    }

    /// Append extra skills; names already present (ignoring case) are skipped
    pub fn with_additional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.insert(name.as_ref(), SkillCategory::Other);
        }
        self
    }

    fn insert(&mut self, name: &str, category: SkillCategory) {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return;
        }
        self.entries.push(SkillEntry {
            name: name.to_string(),
            category,
        });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn category_of(&self, name: &str) -> Option<SkillCategory> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.category)
    }

    pub fn by_category(&self, category: SkillCategory) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Categories that have at least one entry, in declaration order
    pub fn categories(&self) -> Vec<SkillCategory> {
        let present: HashSet<SkillCategory> = self.entries.iter().map(|e| e.category).collect();
        SkillCategory::ALL
            .into_iter()
            .filter(|category| present.contains(category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const DEFAULT_SKILLS: &[(&str, SkillCategory)] = &[
    ("JavaScript", SkillCategory::ProgrammingLanguage),
    ("Python", SkillCategory::ProgrammingLanguage),
    ("Java", SkillCategory::ProgrammingLanguage),
    ("React", SkillCategory::WebTechnology),
    ("Node.js", SkillCategory::WebTechnology),
    ("Vue.js", SkillCategory::WebTechnology),
    ("Angular", SkillCategory::WebTechnology),
    ("HTML", SkillCategory::WebTechnology),
    ("CSS", SkillCategory::WebTechnology),
    ("TypeScript", SkillCategory::ProgrammingLanguage),
    ("SQL", SkillCategory::Database),
    ("MongoDB", SkillCategory::Database),
    ("PostgreSQL", SkillCategory::Database),
    ("MySQL", SkillCategory::Database),
    ("AWS", SkillCategory::CloudPlatform),
    ("Azure", SkillCategory::CloudPlatform),
    ("Docker", SkillCategory::DevOps),
    ("Kubernetes", SkillCategory::DevOps),
    ("Jenkins", SkillCategory::DevOps),
    ("Git", SkillCategory::VersionControl),
    ("Linux", SkillCategory::Other),
    ("Machine Learning", SkillCategory::DataScience),
    ("TensorFlow", SkillCategory::DataScience),
    ("PyTorch", SkillCategory::DataScience),
    ("Data Science", SkillCategory::DataScience),
    ("Statistics", SkillCategory::DataScience),
    ("Communication", SkillCategory::SoftSkill),
    ("Leadership", SkillCategory::SoftSkill),
    ("Problem Solving", SkillCategory::SoftSkill),
    ("Teamwork", SkillCategory::SoftSkill),
    ("Agile", SkillCategory::SoftSkill),
    ("Express.js", SkillCategory::WebTechnology),
    ("Redux", SkillCategory::WebTechnology),
    ("GraphQL", SkillCategory::WebTechnology),
    ("REST APIs", SkillCategory::WebTechnology),
    ("Microservices", SkillCategory::Other),
    ("CI/CD", SkillCategory::DevOps),
    ("Pandas", SkillCategory::DataScience),
    ("NumPy", SkillCategory::DataScience),
    ("Scikit-learn", SkillCategory::DataScience),
    ("Tableau", SkillCategory::DataScience),
    ("Spring Boot", SkillCategory::WebTechnology),
    ("Django", SkillCategory::WebTechnology),
];
