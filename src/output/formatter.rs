//! Output formatters for extraction results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::extraction::history::NOT_SPECIFIED;
use crate::extraction::{ExtractionResult, Field, SkillCategory, SkillTaxonomy};
use colored::{Color, Colorize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

pub trait OutputFormatter {
    fn format_result(&self, result: &ExtractionResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable summary with confidence badges
pub struct ConsoleFormatter {
    use_colors: bool,
    taxonomy: SkillTaxonomy,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter for the configured output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, taxonomy: SkillTaxonomy) -> Self {
        Self {
            use_colors,
            taxonomy,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("HIGH", Color::Green),
            75..=89 => ("GOOD", Color::BrightGreen),
            50..=74 => ("FAIR", Color::Yellow),
            _ => ("LOW", Color::Red),
        };

        if self.use_colors {
            format!("[{} {}%]", badge.color(color).bold(), score)
        } else {
            format!("[{} {}%]", badge, score)
        }
    }

    fn format_field(&self, label: &str, value: &str, confidence: Option<u8>) -> String {
        match confidence {
            Some(score) if !value.is_empty() => {
                format!("{:<10} {} {}\n", label, value, self.format_score_badge(score))
            }
            _ => format!(
                "{:<10} {}\n",
                label,
                self.colorize("not found", Color::BrightBlack)
            ),
        }
    }

    fn grouped_skills<'a>(
        &self,
        result: &'a ExtractionResult,
    ) -> BTreeMap<SkillCategory, Vec<&'a str>> {
        let mut groups: BTreeMap<SkillCategory, Vec<&str>> = BTreeMap::new();
        for skill in &result.skills {
            let category = self
                .taxonomy
                .category_of(skill)
                .unwrap_or(SkillCategory::Other);
            groups.entry(category).or_default().push(skill);
        }
        groups
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &ExtractionResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME EXTRACTION"));
        output.push_str(&format!(
            "Document confidence: {}\n",
            self.format_score_badge(result.extraction_confidence)
        ));

        output.push_str(&self.format_header("Personal Information"));
        output.push_str(&self.format_field(
            "Name",
            &result.name,
            result.field_confidence(Field::Name),
        ));
        if result.has_placeholder_name() {
            output.push_str(&format!(
                "{:<10} {}\n",
                "",
                self.colorize("placeholder, no name detected", Color::Yellow)
            ));
        }
        output.push_str(&self.format_field(
            "Email",
            &result.email,
            result.field_confidence(Field::Email),
        ));
        output.push_str(&self.format_field(
            "Phone",
            &result.phone,
            result.field_confidence(Field::Phone),
        ));
        output.push_str(&self.format_field(
            "Location",
            &result.location,
            result.field_confidence(Field::Location),
        ));
        if !result.salary_expectation.is_empty() {
            output.push_str(&format!("{:<10} {}\n", "Salary", result.salary_expectation));
        }

        output.push_str(&self.format_header("Skills"));
        if result.skills.is_empty() {
            output.push_str(&format!("{}\n", self.colorize("No skills detected", Color::BrightBlack)));
        } else {
            for (category, skills) in self.grouped_skills(result) {
                output.push_str(&format!(
                    "{}: {}\n",
                    self.colorize(&category.to_string(), Color::Cyan),
                    skills.join(", ")
                ));
            }
        }

        output.push_str(&self.format_header("Background"));
        output.push_str(&format!("{:<10} {}\n", "Experience", result.experience_summary));
        output.push_str(&format!("{:<10} {}\n", "Education", result.education_summary));

        if !result.work_history.is_empty() {
            output.push_str(&self.format_header("Work History"));
            for entry in &result.work_history {
                let mut heading = entry.title.clone();
                if !entry.company.is_empty() {
                    heading.push_str(&format!(" @ {}", entry.company));
                }
                if let Some(period) = &entry.period {
                    heading.push_str(&format!(" ({})", period));
                }
                output.push_str(&format!("• {}\n", heading));
                for line in &entry.description {
                    output.push_str(&format!("    - {}\n", line));
                }
            }
        }

        if result.experience_summary == NOT_SPECIFIED && result.education_summary == NOT_SPECIFIED {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("Low structure: no experience or education detected", Color::Yellow)
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ExtractionResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, pretty_json: bool, taxonomy: SkillTaxonomy) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, taxonomy),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate(&self, result: &ExtractionResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_result(result),
            OutputFormat::Json => self.json_formatter.format_result(result),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// One distinct output filename per input. Inputs sharing a file stem keep
/// their extension in the name; any name still taken gets a numeric suffix.
pub fn batch_filenames(format: OutputFormat, inputs: &[PathBuf]) -> Vec<String> {
    let mut stem_counts: HashMap<String, usize> = HashMap::new();
    for input in inputs {
        *stem_counts.entry(file_stem(input)).or_default() += 1;
    }

    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = file_stem(input);
            let base_name = match input.extension() {
                Some(ext) if stem_counts[&stem] > 1 => {
                    format!("{}_{}", stem, ext.to_string_lossy())
                }
                _ => stem,
            };

            let mut filename = extraction_filename(format, &base_name);
            let mut index = 2;
            while !taken.insert(filename.clone()) {
                filename = extraction_filename(format, &format!("{}_{}", base_name, index));
                index += 1;
            }
            filename
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn extraction_filename(format: OutputFormat, base_name: &str) -> String {
    match format {
        OutputFormat::Console => format!("{}_extraction.txt", base_name),
        OutputFormat::Json => format!("{}_extraction.json", base_name),
    }
}
