//! CLI interface for the resume extractor

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-extract")]
#[command(about = "Extract candidate details from resume text with confidence scores")]
#[command(long_about = "Infer name, contact details, skills, experience and education from resume text using ordered pattern matching, with a confidence score for every detected field")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract fields from a single document
    Extract {
        /// Path to the resume (PDF, TXT, MD)
        #[arg(short, long)]
        input: PathBuf,

        /// Source kind of the text: pdf or word (defaults from the file type)
        #[arg(short = 'k', long)]
        source_kind: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Extract fields from several documents
    Batch {
        /// Paths to resumes (PDF, TXT, MD)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Source kind applied to every input
        #[arg(short = 'k', long)]
        source_kind: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Write one result file per input into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// List the skill taxonomy
    Skills {
        /// Only show one category (e.g. devops, soft_skill)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }

    #[test]
    fn test_cli_parses_extract() {
        let cli = Cli::try_parse_from([
            "resume-extract",
            "extract",
            "--input",
            "cv.pdf",
            "--output",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract { input, output, .. } => {
                assert_eq!(input, PathBuf::from("cv.pdf"));
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected extract command"),
        }
    }
}
